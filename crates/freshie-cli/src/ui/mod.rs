//! Terminal output: status lines and the build summary.
//!
//! Everything goes to stderr so `freshie inspect` can be piped.
//!
//! # Examples
//!
//! ```no_run
//! use freshie_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Loading configuration...");
//! ui::success("Wrote build/freshie.bundle.json");
//! ```

mod format;
mod messages;

pub use format::{format_duration, print_group_summary, summarize};
pub use messages::{info, success, warning};

/// Whether colored output should be used.
///
/// # Environment Variables
///
/// - `NO_COLOR`: if set, disables colors (wins over `FORCE_COLOR`)
/// - `FORCE_COLOR`: if set, enables colors even when stderr is not a TTY
///
/// Without either, colors follow `console`'s terminal detection for stderr.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}

/// Apply the color decision to `owo-colors` and `console` output.
///
/// Call early in `main`, after parsing flags.
///
/// # Arguments
///
/// * `no_color` - The `--no-color` flag; always disables colors
///
/// # Examples
///
/// ```no_run
/// use freshie_cli::ui;
///
/// ui::init_colors(true);
/// ```
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    owo_colors::set_override(enabled);
    console::set_colors_enabled_stderr(enabled);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn no_color_disables() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::remove_var("FORCE_COLOR");
        }
        assert!(!should_use_color());
        unsafe { std::env::remove_var("NO_COLOR") };
    }

    #[test]
    #[serial]
    fn force_color_enables() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_color());
        unsafe { std::env::remove_var("FORCE_COLOR") };
    }

    #[test]
    #[serial]
    fn no_color_overrides_force() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_color());
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
    }
}
