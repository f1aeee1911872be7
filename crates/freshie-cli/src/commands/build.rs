//! `freshie build`: assemble descriptors and write them under `dest`.

use std::path::PathBuf;
use std::time::Instant;

use freshie_bundler::Loader;
use tracing::debug;

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::settings::Settings;
use crate::ui;

/// File written to the output directory
pub const MANIFEST_FILE: &str = "freshie.bundle.json";

pub async fn execute(args: BuildArgs) -> Result<()> {
    let start = Instant::now();

    ui::info("Loading configuration...");
    let build_args = Settings::load(&args.project)?.into_build_args()?;
    debug!(?build_args, "resolved build settings");

    let manifest = run(build_args).await?;

    ui::success(&format!(
        "Wrote {} in {}",
        manifest.display(),
        ui::format_duration(start.elapsed())
    ));
    Ok(())
}

/// Load the config group and write it to `<dest>/freshie.bundle.json`.
/// Returns the written path.
pub async fn run(build_args: freshie_bundler::BuildArgs) -> Result<PathBuf> {
    let dest = build_args.resolved()?.dest;
    let group = Loader::new(build_args).load().await?;

    utils::ensure_output_dir(&dest)?;
    let manifest = dest.join(MANIFEST_FILE);
    if manifest.exists() {
        ui::warning(&format!("Overwriting {}", manifest.display()));
    }
    utils::write_json(&manifest, &group)?;

    ui::print_group_summary(&group);
    Ok(manifest)
}
