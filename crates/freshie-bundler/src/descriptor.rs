//! Bundle descriptors: everything the bundler needs for one output target.

use std::path::PathBuf;

use freshie_config::Options;
use serde::{Deserialize, Serialize};

use crate::plugins::{Plugin, PluginRegistry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleConfig {
    /// Entry module
    pub input: PathBuf,

    pub output: OutputOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_entry_signatures: Option<EntrySignatures>,

    pub treeshake: Treeshake,

    pub plugins: PluginRegistry,
}

impl BundleConfig {
    pub fn add_plugin(&mut self, plugin: Plugin) {
        self.plugins.add(plugin);
    }
}

/// Output shape: a chunk directory (client) or a single file (server)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    #[serde(default)]
    pub sourcemap: bool,

    #[serde(default)]
    pub minify_internal_exports: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_file_names: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_file_names: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_file_names: Option<String>,
}

/// Entry signature policy; `false` lets the bundler drop unused exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntrySignatures {
    Policy(SignaturePolicy),
    Toggle(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignaturePolicy {
    Strict,
    AllowExtension,
    ExportsOnly,
}

/// Tree-shaking switch or tuned options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Treeshake {
    Toggle(bool),
    Options(TreeshakeOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeshakeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_read_side_effects: Option<bool>,

    pub module_side_effects: String,

    pub try_catch_deoptimization: bool,
}

/// Result of one config load
#[derive(Debug, Clone, Serialize)]
pub struct ConfigGroup {
    pub options: Options,
    pub client: BundleConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<BundleConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_signatures_serialize_like_rollup() {
        let strict = EntrySignatures::Policy(SignaturePolicy::Strict);
        assert_eq!(serde_json::to_value(strict).unwrap(), json!("strict"));
        assert_eq!(
            serde_json::to_value(EntrySignatures::Toggle(false)).unwrap(),
            json!(false)
        );

        let parsed: EntrySignatures = serde_json::from_value(json!("exports-only")).unwrap();
        assert_eq!(parsed, EntrySignatures::Policy(SignaturePolicy::ExportsOnly));
    }

    #[test]
    fn treeshake_accepts_bool_or_object() {
        let off: Treeshake = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(off, Treeshake::Toggle(false));

        let tuned: Treeshake = serde_json::from_value(json!({
            "moduleSideEffects": "no-external",
            "tryCatchDeoptimization": false
        }))
        .unwrap();
        assert!(matches!(tuned, Treeshake::Options(o) if o.property_read_side_effects.is_none()));
    }
}
