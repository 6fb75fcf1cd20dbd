use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available deskpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the plan for one environment
    ///
    /// Loads configuration, reads the host manifest and prints the finished
    /// plan as pretty JSON.
    Plan(PlanArgs),

    /// Validate configuration, entry points and the host manifest
    Check(CheckArgs),

    /// Show the transform chain a file would go through
    ///
    /// For assets that exist on disk, also reports whether they would be
    /// inlined or emitted, and under which name.
    Resolve(ResolveArgs),

    /// Write a starter deskpack.toml
    Init(InitArgs),
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Build environment
    ///
    /// Falls back to NODE_ENV: "production" selects production, anything
    /// else development.
    #[arg(short, long, value_enum)]
    pub env: Option<EnvArg>,

    /// Project root (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Write the plan to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Build environment whose profile is checked (falls back to NODE_ENV)
    #[arg(short, long, value_enum)]
    pub env: Option<EnvArg>,

    /// Project root (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// File to resolve, relative to the project root
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Build environment (falls back to NODE_ENV)
    #[arg(short, long, value_enum)]
    pub env: Option<EnvArg>,

    /// Project root (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Fail when no rule matches instead of passing the file through
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project root (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Overwrite an existing deskpack.toml
    #[arg(short, long)]
    pub force: bool,
}
