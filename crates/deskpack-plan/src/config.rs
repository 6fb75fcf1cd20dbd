//! Project configuration for deskpack.
//!
//! This module provides the `ProjectConfig` struct and profile merging logic.
//! For file discovery and layered loading, see the `discovery` module.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlanError, Result as PlanResult};
use crate::plan::{
    SplitChunks, UnmatchedPolicy, default_bundled_dependencies,
    default_entries, default_extensions, default_inline_limit, default_manifest,
    default_output_dir, default_source_dir, default_static_dir, default_target,
    default_template, default_true,
};

/// Everything the builder needs to know about the host project.
///
/// Relative paths are resolved against `root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project root; set by the loader, never read from config files
    #[serde(skip)]
    pub root: PathBuf,

    /// Entry points: chunk name → source path
    #[serde(default = "default_entries")]
    pub entries: IndexMap<String, PathBuf>,

    /// Renderer source directory (alias target for `@`)
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Static assets copied verbatim in production, served in place in development
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Output directory for generated chunks
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// HTML page template
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Host manifest declaring runtime dependencies
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Declared dependencies that are bundled anyway
    #[serde(default = "default_bundled_dependencies")]
    pub bundled_dependencies: Vec<String>,

    /// Import aliases added after `@`, in resolution order. An `@` entry
    /// here replaces the one derived from `source_dir`.
    #[serde(default)]
    pub aliases: IndexMap<String, String>,

    /// Extensions tried for extensionless imports
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Assets smaller than this many bytes are inlined
    #[serde(default = "default_inline_limit")]
    pub inline_limit: u64,

    /// What to do with files no rule matches
    #[serde(default)]
    pub unmatched: UnmatchedPolicy,

    /// Engine target platform
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default)]
    pub split_chunks: SplitChunks,

    /// Project-declared plugins appended after the environment overlay
    #[serde(default)]
    pub plugins: Vec<CustomPlugin>,

    /// Per-environment overrides, keyed by environment name
    #[serde(default)]
    pub profiles: HashMap<String, Value>,
}

/// A plugin declared in project configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPlugin {
    pub name: String,

    /// Plugin-specific configuration forwarded to the engine
    #[serde(default)]
    pub config: Value,

    /// Whether the plugin is emitted into the plan
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            entries: default_entries(),
            source_dir: default_source_dir(),
            static_dir: default_static_dir(),
            output_dir: default_output_dir(),
            template: default_template(),
            manifest: default_manifest(),
            bundled_dependencies: default_bundled_dependencies(),
            aliases: IndexMap::new(),
            extensions: default_extensions(),
            inline_limit: default_inline_limit(),
            unmatched: UnmatchedPolicy::default(),
            target: default_target(),
            split_chunks: SplitChunks::default(),
            plugins: Vec::new(),
            profiles: HashMap::new(),
        }
    }
}

impl ProjectConfig {
    /// Defaults rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use deskpack_plan::ProjectConfig;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let config = ProjectConfig::from_value(json!({
    ///     "entries": { "main": "src/start.js" },
    ///     "inline_limit": 4096
    /// }))
    /// .unwrap();
    /// assert_eq!(config.entries["main"], PathBuf::from("src/start.js"));
    /// assert_eq!(config.inline_limit, 4096);
    /// ```
    pub fn from_value(value: Value) -> PlanResult<Self> {
        serde_json::from_value(value).map_err(|e| PlanError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> PlanResult<Value> {
        serde_json::to_value(self).map_err(|e| PlanError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Replace the entry points.
    pub fn with_entry(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.entries = IndexMap::from([(name.into(), path.into())]);
        self
    }

    /// Resolve `path` against the project root.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn static_path(&self) -> PathBuf {
        self.resolve_path(&self.static_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve_path(&self.output_dir)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.resolve_path(&self.manifest)
    }

    /// Merge the overrides of profile `name`, if any, into this config.
    ///
    /// Objects merge key by key; arrays and scalars replace.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> PlanResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };
        let Some(overrides) = self.profiles.get(name).cloned() else {
            return Ok(self);
        };
        if overrides.is_null() {
            return Ok(self);
        }

        tracing::debug!(profile = name, "applying profile overrides");

        let root = std::mem::take(&mut self.root);
        let mut base = serde_json::to_value(&self).map_err(|err| {
            PlanError::InvalidProfileOverride {
                message: err.to_string(),
            }
        })?;
        merge_values(&mut base, &overrides);
        let mut merged: ProjectConfig =
            serde_json::from_value(base).map_err(|err| PlanError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merged.root = root;
        Ok(merged)
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
