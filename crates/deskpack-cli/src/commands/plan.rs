//! Plan command implementation.

use crate::cli::PlanArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;
use deskpack_plan::build_plan;
use std::fs;

/// Execute the plan command.
///
/// Builds the plan for the selected environment and prints it as pretty
/// JSON, or writes it to `--out` and prints a summary instead.
pub fn execute(args: PlanArgs) -> Result<()> {
    let root = utils::project_root(args.root.as_deref())?;
    let env = utils::select_environment(args.env);
    let config = utils::load_config(&root, env)?;

    let plan = build_plan(&config, env)?;
    let json = serde_json::to_string_pretty(&plan)?;

    match args.out {
        Some(out) => {
            let out = utils::resolve_path(&out, &utils::get_cwd()?);
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(&out, format!("{json}\n")).with_path(&out)?;
            ui::success(&format!("Wrote {} plan to {}", env, out.display()));
            ui::print_plan_summary(&plan);
        }
        None => println!("{json}"),
    }

    Ok(())
}
