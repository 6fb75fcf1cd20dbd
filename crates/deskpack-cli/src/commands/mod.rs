//! Command implementations for the deskpack CLI.
//!
//! Each command lives in its own module and provides an `execute` function
//! that takes the parsed arguments and returns a Result.

pub mod check;
pub mod init;
pub mod plan;
pub mod resolve;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use plan::execute as plan_execute;
pub use resolve::execute as resolve_execute;
