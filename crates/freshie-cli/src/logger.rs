//! Logging setup for the freshie CLI.
//!
//! Library crates emit `tracing` events (`Applying "freshie.config.toml"
//! config`, preset notices, unknown-key warnings); this module installs the
//! subscriber that prints them.
//!
//! ```rust,no_run
//! use freshie_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("Loading configuration");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used with `--verbose`
pub const VERBOSE_FILTER: &str =
    "freshie=debug,freshie_bundler=debug,freshie_config=debug,freshie_cli=debug";

/// Filter used with `--quiet`
pub const QUIET_FILTER: &str =
    "freshie=error,freshie_bundler=error,freshie_config=error,freshie_cli=error";

/// Filter used when neither flag nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str =
    "freshie=info,freshie_bundler=info,freshie_config=info,freshie_cli=info";

/// Pick the filter directives for the given flags.
///
/// # Arguments
///
/// * `verbose` - Debug level for every freshie crate (wins over `quiet`)
/// * `quiet` - Errors only
///
/// # Verbosity Levels
///
/// 1. `--verbose`: [`VERBOSE_FILTER`]
/// 2. `--quiet`: [`QUIET_FILTER`]
/// 3. `RUST_LOG`, when set and valid
/// 4. [`DEFAULT_FILTER`]
///
/// # Examples
///
/// ```
/// use freshie_cli::logger::filter_for;
///
/// let filter = filter_for(true, false);
/// assert!(filter.to_string().contains("freshie_bundler=debug"));
/// ```
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global tracing subscriber.
///
/// Call once, before any logging. Output goes to stderr so stdout stays
/// clean for `freshie inspect`.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable ANSI colors even on a terminal
///
/// # Examples
///
/// ```rust,no_run
/// use freshie_cli::logger::init_logger;
///
/// // Quiet mode for CI
/// init_logger(false, true, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}
