//! Bundle plan builder for the UI process of a desktop application.
//!
//! The crate produces a [`Plan`]: pure data describing entries, output
//! naming, an ordered rule table, plugin directives and resolution settings.
//! An external bundling engine consumes it.

pub mod builder;
pub mod config;
pub mod discovery;
pub mod environment;
pub mod error;
pub mod manifest;
pub mod plan;
pub mod validation;

// Re-export main types
pub use builder::{
    SOURCE_ALIAS, apply_environment_overlay, build_base_plan, build_plan,
    build_plan_with_manifest, default_rules,
};
pub use config::*;
pub use environment::Environment;
pub use error::*;
pub use manifest::{HostManifest, externals};
pub use plan::*;

// Re-export discovery and validation
pub use discovery::{CONFIG_FILE, ConfigDiscovery, ENV_PREFIX, discover};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
