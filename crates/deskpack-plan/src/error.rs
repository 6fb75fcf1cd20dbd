//! Error types for plan construction, configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanError>;

/// Fatal configuration errors. Any of these aborts plan construction.
#[derive(Debug, Error)]
pub enum PlanError {
    // Filesystem validation errors
    #[error("entry path not found: {}", path.display())]
    EntryNotFound { path: PathBuf },

    #[error("host manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("malformed host manifest {}: {message}", path.display())]
    MalformedManifest { path: PathBuf, message: String },

    // Config parsing/loading errors
    #[error("invalid config value for '{field}'{}", hint_suffix(hint))]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    #[error("invalid match pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    // Schema validation errors (no filesystem checks)
    #[error("no entries specified")]
    NoEntries,

    #[error("schema validation failed: {message}{}", hint_suffix(hint))]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file matched no rule in the table.
///
/// Kept apart from [`PlanError`] because it is a local policy signal, not a
/// build failure. See [`crate::UnmatchedPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no rule matches '{path}'")]
pub struct NoMatchingRule {
    pub path: String,
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(" ({hint})"),
        None => String::new(),
    }
}
