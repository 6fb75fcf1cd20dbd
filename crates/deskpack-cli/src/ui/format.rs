//! Formatting utilities for sizes and plan summaries.

use console::Term;
use deskpack_plan::Plan;
use owo_colors::OwoColorize;

use super::colors_enabled;

/// Format file size in human-readable format.
///
/// # Examples
///
/// ```
/// use deskpack_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Print a short summary of `plan` to stderr.
pub fn print_plan_summary(plan: &Plan) {
    let width = Term::stderr().size().1 as usize;
    let rule = "─".repeat(width.clamp(20, 80));
    let environment = plan
        .environment
        .map(|env| env.to_string())
        .unwrap_or_else(|| "base".to_string());

    if colors_enabled() {
        eprintln!("\n{} {}", "Plan".bold().underline(), environment.dimmed());
    } else {
        eprintln!("\nPlan {}", environment);
    }
    eprintln!("{}", rule);

    for (name, path) in &plan.entries {
        let line = format!("{} <- {}", plan.output.render_filename(name), path.display());
        if colors_enabled() {
            eprintln!("  {} {}", "▸".blue(), line.bright_white().bold());
        } else {
            eprintln!("  ▸ {}", line);
        }
    }

    let plugins: Vec<&str> = plan.plugins.iter().map(|p| p.name()).collect();
    let externals: Vec<&str> = plan.externals.iter().map(String::as_str).collect();
    eprintln!("  rules:     {}", plan.rules.len());
    eprintln!("  plugins:   {}", plugins.join(", "));
    eprintln!(
        "  externals: {}",
        if externals.is_empty() {
            "(none)".to_string()
        } else {
            externals.join(", ")
        }
    );
    eprintln!("{}", rule);
}
