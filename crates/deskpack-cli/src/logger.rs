//! Logging setup for the deskpack CLI.
//!
//! The logging level is determined in this order:
//! 1. `--verbose`: DEBUG for deskpack crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG` environment variable
//! 4. Default: INFO for deskpack crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "deskpack=debug,deskpack_plan=debug,deskpack_cli=debug";
const QUIET_FILTER: &str = "deskpack=error,deskpack_plan=error,deskpack_cli=error";
const DEFAULT_FILTER: &str = "deskpack=info,deskpack_plan=info,deskpack_cli=info";

/// Build the filter for the given flags.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global tracing subscriber. Call once, before any logging.
///
/// Logs go to stderr so that `deskpack plan` output on stdout stays valid JSON.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}
