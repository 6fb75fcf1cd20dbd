//! File-based config discovery and layered loading
//!
//! Layers, lowest priority first: built-in defaults, `deskpack.toml` (or the
//! `deskpack` field of `package.json`), `DESKPACK_*` environment variables,
//! then the profile matching the build environment.

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde_json::Value;

use crate::config::ProjectConfig;
use crate::environment::Environment;
use crate::error::{PlanError, Result};

/// Name of the dedicated config file
pub const CONFIG_FILE: &str = "deskpack.toml";

/// Prefix of environment variables that override config values
pub const ENV_PREFIX: &str = "DESKPACK_";

/// Field of `package.json` that may hold the config instead of a dedicated file
const PACKAGE_FIELD: &str = "deskpack";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use deskpack_plan::{ConfigDiscovery, Environment};
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load(Some(Environment::Production)).unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. deskpack.toml
    /// 2. package.json (deskpack field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed = serde_json::from_str::<Value>(&content).ok()?;
        match parsed.get(PACKAGE_FIELD) {
            Some(section) if !section.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load the layered config, applying the profile for `environment`.
    ///
    /// Fields no layer sets take their serde defaults, so a map declared in
    /// the file (such as `entries`) replaces the default map instead of
    /// extending it. A project without any config file gets the defaults.
    pub fn load(&self, environment: Option<Environment>) -> Result<ProjectConfig> {
        let mut figment = Figment::new();

        match self.find() {
            Some(path) if is_package_json(&path) => {
                tracing::debug!(file = %path.display(), "loading config from package.json");
                figment = figment.merge(Serialized::defaults(load_package_section(&path)?));
            }
            Some(path) => {
                tracing::debug!(file = %path.display(), "loading config file");
                figment = figment.merge(Toml::file(path));
            }
            None => tracing::debug!(root = %self.root.display(), "no config file, using defaults"),
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let mut config: ProjectConfig =
            figment.extract().map_err(|e| PlanError::InvalidValue {
                field: "configuration".to_string(),
                hint: Some(e.to_string()),
            })?;
        config.root = self.root.clone();

        config.materialize_profile(environment.map(Environment::as_str))
    }
}

fn is_package_json(path: &Path) -> bool {
    path.file_name() == Some(std::ffi::OsStr::new("package.json"))
}

fn load_package_section(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| PlanError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    match parsed.get(PACKAGE_FIELD) {
        Some(Value::Object(section)) => Ok(Value::Object(section.clone())),
        _ => Err(PlanError::InvalidValue {
            field: PACKAGE_FIELD.to_string(),
            hint: Some("The 'deskpack' field of package.json must be an object".to_string()),
        }),
    }
}

/// Discover and load config from `root` (convenience function)
pub fn discover(root: impl AsRef<Path>, environment: Environment) -> Result<ProjectConfig> {
    ConfigDiscovery::new(root).load(Some(environment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn find_prefers_toml_over_package_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "inline_limit = 1\n").unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "deskpack": { "inline_limit": 2 } }"#,
        )
        .unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        assert_eq!(discovery.find().unwrap(), dir.path().join(CONFIG_FILE));
    }

    #[test]
    fn package_json_without_field_is_not_a_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "app", "dependencies": {} }"#,
        )
        .unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn non_object_package_field_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{ "deskpack": "yes" }"#).unwrap();
        let err = load_package_section(&path).unwrap_err();
        assert!(matches!(err, PlanError::InvalidValue { .. }));
    }
}
