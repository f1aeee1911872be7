//! `freshie inspect`: print the assembled descriptors as JSON.

use freshie_bundler::{ConfigGroup, Loader};
use serde_json::Value;

use crate::cli::{InspectArgs, InspectTarget};
use crate::error::Result;
use crate::settings::Settings;

pub async fn execute(args: InspectArgs) -> Result<()> {
    let build_args = Settings::load(&args.project)?.into_build_args()?;
    let group = Loader::new(build_args).load().await?;
    println!("{}", render(&group, args.target)?);
    Ok(())
}

/// Pretty JSON for the selected part of `group`.
pub fn render(group: &ConfigGroup, target: InspectTarget) -> Result<String> {
    let value = match target {
        InspectTarget::All => serde_json::to_value(group)?,
        InspectTarget::Options => serde_json::to_value(&group.options)?,
        InspectTarget::Client => serde_json::to_value(&group.client)?,
        InspectTarget::Server => group
            .server
            .as_ref()
            .map(serde_json::to_value)
            .transpose()?
            .unwrap_or(Value::Null),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
