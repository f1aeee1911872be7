//! Miette rendering for CLI errors.

use freshie_bundler::BuildError;
use freshie_config::ConfigError;
use miette::Report;

use crate::error::CliError;

/// Convert a [`CliError`] into a miette report, attaching hints where the
/// fix is known.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => config_error_to_miette(e),
        CliError::InvalidArgument(msg) => miette::miette!(
            "Invalid argument: {}\n\nHint: Check the flags and FRESHIE_* environment variables",
            msg
        ),
        _ => miette::miette!("{}", err),
    }
}

pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::NoRoutes(dir) => miette::miette!(
            "No routes found in {}\n\nHint: Add a page such as {}/index.js",
            dir.display(),
            dir.display()
        ),
        BuildError::Config(e) => config_error_to_miette(e),
        BuildError::Customize {
            source_name,
            message,
        } => miette::miette!(
            "Bundle customizer from '{}' produced an invalid descriptor: {}\n\nHint: Check the \"bundle\" section of {}",
            source_name,
            message,
            source_name
        ),
        other => miette::miette!("{}", other),
    }
}

pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::PresetNotFound { ref name, .. } => miette::miette!(
            "Configuration error: {}\n\nHint: Install it with `npm install --save-dev {}`",
            err,
            name
        ),
        ConfigError::UnsupportedFormat(_) => miette::miette!(
            "Configuration error: {}\n\nHint: Use freshie.config.toml, freshie.config.json or a \"freshie\" field in package.json",
            err
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_routes_gets_a_hint() {
        let report = cli_error_to_miette(BuildError::NoRoutes(PathBuf::from("src/routes")).into());
        let msg = report.to_string();
        assert!(msg.contains("No routes found in src/routes"));
        assert!(msg.contains("src/routes/index.js"));
    }

    #[test]
    fn missing_preset_suggests_install() {
        let err = ConfigError::PresetNotFound {
            name: "@freshie/ssr.node".to_string(),
            dir: PathBuf::from("node_modules/@freshie/ssr.node"),
        };
        let msg = cli_error_to_miette(BuildError::Config(err).into()).to_string();
        assert!(msg.contains("npm install --save-dev @freshie/ssr.node"));
    }

    #[test]
    fn other_errors_keep_their_message() {
        let msg = cli_error_to_miette(CliError::Custom("boom".to_string())).to_string();
        assert_eq!(msg, "boom");
    }
}
