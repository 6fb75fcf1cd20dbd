//! deskpack - bundle plans for the UI process of a desktop application.

use clap::Parser;
use deskpack_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
    };

    result.map_err(error::cli_error_to_miette)
}
