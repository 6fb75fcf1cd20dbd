//! Command-line interface definition.
//!
//! - `deskpack plan` - Build a plan and print it as JSON
//! - `deskpack check` - Validate configuration, entries and manifest
//! - `deskpack resolve` - Show how one file would be processed
//! - `deskpack init` - Write a starter `deskpack.toml`

mod commands;
pub mod enums;
mod tests;

use clap::Parser;

pub use commands::{CheckArgs, Command, InitArgs, PlanArgs, ResolveArgs};
pub use enums::*;

/// deskpack - bundle plans for the UI process of a desktop application
#[derive(Parser, Debug)]
#[command(
    name = "deskpack",
    version,
    about = "Bundle plans for desktop renderer processes",
    long_about = "deskpack builds a declarative bundle plan (entries, output naming, an ordered\n\
                  rule table, plugin directives and resolution settings) for the UI process of\n\
                  a desktop application. A bundling engine consumes the plan."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
