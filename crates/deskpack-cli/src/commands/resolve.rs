//! Resolve command implementation.

use crate::cli::ResolveArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;
use deskpack_plan::{
    AssetOutput, Plan, Resolution, Transform, UnmatchedPolicy, build_plan, normalize_path,
};
use std::fs;
use std::path::Path;

/// Execute the resolve command.
///
/// Prints the transform chain for the file on stdout. With `--strict` a file
/// that matches no rule is an error; otherwise the project's `unmatched`
/// policy decides.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let root = utils::project_root(args.root.as_deref())?;
    let env = utils::select_environment(args.env);
    let config = utils::load_config(&root, env)?;
    let plan = build_plan(&config, env)?;

    let relative = args.file.strip_prefix(&root).unwrap_or(&args.file);
    let file = normalize_path(relative);
    let policy = if args.strict {
        UnmatchedPolicy::Fail
    } else {
        config.unmatched
    };

    match plan.resolve(&file, policy)? {
        Resolution::Chain(chain) => {
            println!("{file}");
            for (index, transform) in chain.iter().enumerate() {
                println!("  {}. {}", index + 1, describe(transform));
            }
        }
        Resolution::PassThrough => {
            println!("{file}");
            println!("  (no matching rule, passed through unchanged)");
            return Ok(());
        }
    }

    let on_disk = root.join(relative);
    if on_disk.is_file() {
        report_asset(&plan, &file, &on_disk)?;
    }

    Ok(())
}

fn describe(transform: &Transform) -> String {
    if transform.options.is_empty() {
        transform.loader.clone()
    } else {
        let options = serde_json::to_string(&transform.options).unwrap_or_default();
        format!("{} {}", transform.loader, options)
    }
}

fn report_asset(plan: &Plan, file: &str, path: &Path) -> Result<()> {
    let contents = fs::read(path).with_path(path)?;
    match plan.resolve_asset(file, &contents) {
        Some(AssetOutput::Inline { .. }) => {
            println!(
                "  => inline ({} as a data URI)",
                ui::format_size(contents.len() as u64)
            );
        }
        Some(AssetOutput::Emit { file_name }) => {
            println!("  => emit {}", file_name);
        }
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_without_options() {
        assert_eq!(describe(&Transform::new("css-loader")), "css-loader");
    }

    #[test]
    fn test_describe_with_options() {
        let transform = Transform::new("url-loader").with_option("limit", 10_000);
        assert_eq!(describe(&transform), r#"url-loader {"limit":10000}"#);
    }
}
