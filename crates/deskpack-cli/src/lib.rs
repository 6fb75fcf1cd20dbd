//! deskpack CLI.
//!
//! The command-line boundary around `deskpack-plan`: it parses arguments,
//! reads `NODE_ENV` and the working directory once, and hands explicit values
//! to the library.
//!
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - colored status lines and summaries on stderr
//! - [`commands`] - `plan`, `check`, `resolve` and `init`

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
