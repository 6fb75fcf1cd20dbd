//! Error handling for the deskpack CLI.
//!
//! Library failures arrive as [`PlanError`] or [`NoMatchingRule`] and are
//! wrapped in [`CliError`]. `main` turns the final error into a `miette`
//! report.
//!
//! # Example
//!
//! ```rust,no_run
//! use deskpack_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_asset(path: &Path) -> Result<Vec<u8>> {
//!     std::fs::read(path).with_path(path)
//! }
//! ```

use std::path::PathBuf;

use deskpack_plan::{NoMatchingRule, PlanError};
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration, manifest or validation failures from the plan builder
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// A file matched no rule while `--strict` was in effect
    #[error(transparent)]
    NoMatchingRule(#[from] NoMatchingRule),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint line to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message with `msg`.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

/// Convert a `CliError` to a miette report, attaching help where one applies.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match help_for(&err) {
        Some(help) => miette::miette!(help = help, "{}", err),
        None => miette::miette!("{}", err),
    }
}

fn help_for(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::Plan(PlanError::EntryNotFound { .. }) => {
            Some("Check the [entries] table in deskpack.toml")
        }
        CliError::Plan(PlanError::ManifestNotFound { .. }) => {
            Some("Run deskpack from the project root or pass --root")
        }
        CliError::Plan(PlanError::NoEntries) => Some("Declare at least one entry under [entries]"),
        CliError::NoMatchingRule(_) => Some("Drop --strict to let unmatched files pass through"),
        _ => None,
    }
}
