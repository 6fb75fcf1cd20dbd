//! Init command implementation.
//!
//! Writes a `deskpack.toml` holding every default, so a project can see and
//! edit the values the builder would otherwise assume.

use crate::cli::InitArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use deskpack_plan::{CONFIG_FILE, ProjectConfig};
use std::fs;

const HEADER: &str = "\
# deskpack configuration
#
# Per-environment overrides go under [profiles.development] and
# [profiles.production]; objects merge, arrays and scalars replace.

";

/// Execute the init command.
///
/// # Errors
///
/// Fails if `deskpack.toml` already exists and `--force` was not given.
pub fn execute(args: InitArgs) -> Result<()> {
    let root = utils::project_root(args.root.as_deref())?;
    let path = root.join(CONFIG_FILE);

    if path.exists() && !args.force {
        return Err(CliError::InvalidArgument(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let content = render_config(&ProjectConfig::new(&root))?;
    fs::write(&path, content).with_path(&path)?;

    ui::success(&format!("Created {}", path.display()));
    ui::info("Next: run 'deskpack check' to validate entries and the manifest");
    Ok(())
}

fn render_config(config: &ProjectConfig) -> Result<String> {
    let body = toml::to_string_pretty(config)?;
    Ok(format!("{HEADER}{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_config_parses_back() {
        let rendered = render_config(&ProjectConfig::default()).unwrap();
        assert!(rendered.starts_with("# deskpack configuration"));

        let value: toml::Value = toml::from_str(&rendered).unwrap();
        assert_eq!(value["static_dir"].as_str(), Some("static"));
        assert_eq!(value["inline_limit"].as_integer(), Some(10_000));
        assert_eq!(value["entries"]["renderer"].as_str(), Some("src/renderer/main.js"));
    }
}
