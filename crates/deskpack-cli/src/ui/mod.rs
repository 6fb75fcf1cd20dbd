//! Terminal output helpers.
//!
//! Status lines go to stderr so they never mix with a plan printed on stdout.
//!
//! ```no_run
//! use deskpack_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Plan written");
//! ui::warning("No deskpack.toml found, using defaults");
//! ```

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_size, print_plan_summary};
pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(true);

/// Color decision from its inputs: the `--no-color` flag, whether `NO_COLOR`
/// and `FORCE_COLOR` are set, and whether stderr is attended.
///
/// `NO_COLOR` wins over `FORCE_COLOR`; otherwise colors follow the terminal.
pub fn decide_colors(
    no_color_flag: bool,
    no_color_env: bool,
    force_color_env: bool,
    attended: bool,
) -> bool {
    if no_color_flag || no_color_env {
        return false;
    }
    force_color_env || attended
}

/// Decide color support once, at startup.
pub fn init_colors(no_color: bool) {
    let enabled = decide_colors(
        no_color,
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("FORCE_COLOR").is_some(),
        console::user_attended_stderr(),
    );
    COLORS.store(enabled, Ordering::Relaxed);
    console::set_colors_enabled_stderr(enabled);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_flag_disables_colors() {
        assert!(!decide_colors(true, false, true, true));
        assert!(!decide_colors(true, false, false, true));
    }

    #[test]
    fn test_no_color_env_wins_over_force() {
        assert!(!decide_colors(false, true, true, true));
    }

    #[test]
    fn test_force_color_without_terminal() {
        assert!(decide_colors(false, false, true, false));
        assert!(!decide_colors(false, false, false, false));
        assert!(decide_colors(false, false, false, true));
    }
}
