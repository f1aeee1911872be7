//! Formatting for durations and the descriptor summary.

use std::time::Duration;

use console::Term;
use freshie_bundler::{BundleConfig, ConfigGroup};
use owo_colors::OwoColorize;

/// Format a duration as `50ms`, `1.50s` or `1m 30s`.
///
/// ```
/// use std::time::Duration;
/// use freshie_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{total_ms}ms")
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// One summary row per bundle: label, input, plugin pipeline.
pub fn summarize(group: &ConfigGroup) -> Vec<(&'static str, String, String)> {
    let row = |label, bundle: &BundleConfig| {
        (
            label,
            bundle.input.display().to_string(),
            bundle.plugins.names().join(" → "),
        )
    };

    let mut rows = vec![row("client", &group.client)];
    if let Some(server) = &group.server {
        rows.push(row("server", server));
    }
    rows
}

/// Print the bundles of `group` to stderr.
pub fn print_group_summary(group: &ConfigGroup) {
    let width = (Term::stderr().size().1 as usize).min(80);

    eprintln!("\n{}", "Bundle Summary".bold().underline());
    eprintln!("{}", "─".repeat(width));

    for (label, input, plugins) in summarize(group) {
        eprintln!(
            "  {} {} {}",
            "▸".blue(),
            label.bright_white().bold(),
            input.dimmed()
        );
        eprintln!("    {}", plugins.dimmed());
    }

    eprintln!("{}", "─".repeat(width));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.00s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }
}
