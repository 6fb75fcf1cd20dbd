//! Pluggable config validation strategies
//!
//! Separates filesystem validation (entry files must exist) from schema
//! validation (values must be well-formed).

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::{PlanError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &ProjectConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use deskpack_plan::{ConfigValidator, ProjectConfig, SchemaValidator};
///
/// let config = ProjectConfig::default().with_entry("main", "src/start.js");
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &ProjectConfig) -> Result<()> {
        if config.entries.is_empty() {
            return Err(PlanError::NoEntries);
        }

        for (name, path) in &config.entries {
            if name.trim().is_empty() {
                return Err(PlanError::SchemaValidation {
                    message: "entry names cannot be empty".to_string(),
                    hint: Some(format!("Name the entry for {}", path.display())),
                });
            }
            if path.as_os_str().is_empty() {
                return Err(PlanError::SchemaValidation {
                    message: format!("entry '{}' has an empty path", name),
                    hint: None,
                });
            }
        }

        for dependency in &config.bundled_dependencies {
            if dependency.trim().is_empty() {
                return Err(PlanError::SchemaValidation {
                    message: "bundled dependency names cannot be empty".to_string(),
                    hint: Some(
                        "Remove empty strings from the 'bundled_dependencies' array".to_string(),
                    ),
                });
            }
        }

        if let Some(ext) = config.extensions.iter().find(|ext| !ext.starts_with('.')) {
            return Err(PlanError::SchemaValidation {
                message: format!("extension '{}' must start with '.'", ext),
                hint: Some(format!("Use '.{}'", ext)),
            });
        }

        if config.inline_limit == 0 {
            return Err(PlanError::SchemaValidation {
                message: "inline_limit must be positive".to_string(),
                hint: Some("Use 1 to never inline assets".to_string()),
            });
        }

        if let Some(plugin) = config.plugins.iter().find(|p| p.name.trim().is_empty()) {
            return Err(PlanError::SchemaValidation {
                message: "plugin names cannot be empty".to_string(),
                hint: Some(format!("Plugin config: {}", plugin.config)),
            });
        }

        Ok(())
    }
}

/// Filesystem validator
///
/// Runs [`SchemaValidator`], then checks that every entry resolves to an
/// existing file under the project root.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &ProjectConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for entry in config.entries.values() {
            let path = self.root.join(entry);
            if !path.is_file() {
                return Err(PlanError::EntryNotFound { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &ProjectConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation against the config's own root
pub fn validate_fs(config: &ProjectConfig) -> Result<()> {
    FsValidator::new(&config.root).validate(config)
}
