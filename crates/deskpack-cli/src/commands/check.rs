//! Check command implementation.
//!
//! Validates configuration, entry points and the host manifest without
//! emitting a plan.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use deskpack_plan::{ConfigDiscovery, HostManifest, PlanError, ProjectConfig, validate_schema};

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the layered config and run the schema checks
/// 2. Check every entry point is an existing file
/// 3. Read the host manifest and report the externals
/// 4. Warn about allow-listed packages the manifest does not declare
pub fn execute(args: CheckArgs) -> Result<()> {
    let root = utils::project_root(args.root.as_deref())?;
    let env = utils::select_environment(args.env);

    ui::info("Checking configuration...");
    match ConfigDiscovery::new(&root).find() {
        Some(file) => ui::info(&format!("Using {}", file.display())),
        None => ui::warning("No deskpack.toml found, using defaults"),
    }
    let config = utils::load_config(&root, env)?;
    validate_schema(&config)?;
    ui::success(&format!("Configuration is valid ({} profile)", env));

    ui::info("Checking entry points...");
    check_entries(&config)?;

    ui::info("Checking host manifest...");
    let manifest = HostManifest::load(config.manifest_path())?;
    ui::success(&format!(
        "Found {} dependencies in {}",
        manifest.dependencies.len(),
        manifest.path.display()
    ));

    let externals = manifest.externals(config.bundled_dependencies.as_slice());
    if externals.is_empty() {
        ui::info("No externals: every dependency is bundled");
    } else {
        let names: Vec<&str> = externals.iter().map(String::as_str).collect();
        ui::info(&format!("Externals: {}", names.join(", ")));
    }

    for warning in manifest_warnings(&config, &manifest) {
        ui::warning(&warning);
    }

    ui::success("All checks passed!");
    Ok(())
}

fn check_entries(config: &ProjectConfig) -> Result<()> {
    let mut missing = Vec::new();
    for (name, path) in &config.entries {
        let resolved = config.resolve_path(path);
        if resolved.is_file() {
            ui::success(&format!("  {} ({}) exists", name, path.display()));
        } else {
            ui::error(&format!("  {} ({}) not found", name, resolved.display()));
            missing.push(resolved);
        }
    }

    if let Some(path) = missing.into_iter().next() {
        return Err(PlanError::EntryNotFound { path }.into());
    }
    Ok(())
}

fn manifest_warnings(config: &ProjectConfig, manifest: &HostManifest) -> Vec<String> {
    let mut warnings: Vec<String> = config
        .bundled_dependencies
        .iter()
        .filter(|name| !manifest.dependencies.contains_key(name.as_str()))
        .map(|name| format!("'{}' is bundled but not declared in the manifest", name))
        .collect();

    if !config.static_path().is_dir() {
        warnings.push(format!(
            "Static directory {} does not exist; production builds will copy nothing",
            config.static_path().display()
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_undeclared_bundled_dependency_warns() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("static")).unwrap();
        let mut config = ProjectConfig::new(dir.path());
        config.bundled_dependencies = vec!["react".to_string(), "react-router".to_string()];
        let manifest = HostManifest::from_dependencies([("react", "^16.4.0")]);

        let warnings = manifest_warnings(&config, &manifest);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("react-router"));
    }

    #[test]
    fn test_missing_static_dir_warns() {
        let dir = TempDir::new().unwrap();
        let config = ProjectConfig::new(dir.path());
        let manifest = HostManifest::from_dependencies([("react", "^16.4.0")]);

        let warnings = manifest_warnings(&config, &manifest);
        assert!(warnings.iter().any(|w| w.contains("Static directory")));
    }

    #[test]
    fn test_missing_entry_fails() {
        let dir = TempDir::new().unwrap();
        let config = ProjectConfig::new(dir.path()).with_entry("main", "src/start.js");
        assert!(check_entries(&config).is_err());
    }
}
