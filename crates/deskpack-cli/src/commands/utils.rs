//! Shared utilities for command implementations.
//!
//! This is the only place the CLI reads ambient process state: the working
//! directory and `NODE_ENV`. Everything downstream receives explicit values.

use crate::cli::EnvArg;
use crate::error::{CliError, Result};
use deskpack_plan::{ConfigDiscovery, Environment, ProjectConfig};
use std::path::{Path, PathBuf};

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Custom(format!("Failed to get current working directory: {}", e))
    })
}

/// The project root: `--root` resolved against the working directory, or the
/// working directory itself.
pub fn project_root(root: Option<&Path>) -> Result<PathBuf> {
    let cwd = get_cwd()?;
    let root = match root {
        Some(root) => resolve_path(root, &cwd),
        None => cwd,
    };
    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }
    Ok(root)
}

/// Pick the build environment: the explicit flag, else `NODE_ENV`.
pub fn select_environment(arg: Option<EnvArg>) -> Environment {
    match arg {
        Some(arg) => arg.into(),
        None => {
            let node_env = std::env::var("NODE_ENV").ok();
            let env = Environment::from_node_env(node_env.as_deref());
            tracing::debug!(node_env = ?node_env, %env, "environment taken from NODE_ENV");
            env
        }
    }
}

/// Load the layered project config for `env`.
pub fn load_config(root: &Path, env: Environment) -> Result<ProjectConfig> {
    let discovery = ConfigDiscovery::new(root);
    match discovery.find() {
        Some(file) => tracing::debug!(file = %file.display(), "using config file"),
        None => tracing::debug!("no config file found, using defaults"),
    }
    Ok(discovery.load(Some(env))?)
}
