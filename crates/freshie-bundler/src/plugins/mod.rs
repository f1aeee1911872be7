//! Plugin descriptors.
//!
//! A [`Plugin`] names one bundler plugin together with the options it is
//! constructed with. The bundler driver maps each variant onto its own
//! implementation; nothing here runs plugin code.

pub mod registry;

use std::path::PathBuf;

use freshie_config::PluginConfig;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::routes::Route;

pub use registry::{PluginPhase, PluginRegistry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum Plugin {
    /// Client-side router runtime
    Router,

    /// Copies static directories into the output
    Copy { paths: Vec<PathBuf> },

    /// Injects the route manifest into the bundle
    Runtime {
        routes: Vec<Route>,
        #[serde(rename = "isDOM")]
        is_dom: bool,
    },

    /// Prints the build summary
    Summary {
        #[serde(rename = "isDOM")]
        is_dom: bool,
    },

    /// Path alias resolution
    Alias { entries: IndexMap<String, PathBuf> },

    /// Token replacement in bundled code
    Replace { values: IndexMap<String, String> },

    /// Node-style module resolution
    Resolve { options: PluginConfig },

    /// JSON module loading
    Json { options: PluginConfig },

    /// CommonJS interop
    #[serde(rename = "commonjs")]
    CommonJs { options: PluginConfig },

    /// Minification
    Terser { options: PluginConfig },
}

impl Plugin {
    pub fn name(&self) -> &'static str {
        match self {
            Plugin::Router => "router",
            Plugin::Copy { .. } => "copy",
            Plugin::Runtime { .. } => "runtime",
            Plugin::Summary { .. } => "summary",
            Plugin::Alias { .. } => "alias",
            Plugin::Replace { .. } => "replace",
            Plugin::Resolve { .. } => "resolve",
            Plugin::Json { .. } => "json",
            Plugin::CommonJs { .. } => "commonjs",
            Plugin::Terser { .. } => "terser",
        }
    }

    /// Pipeline phase; decides the plugin's position in a [`PluginRegistry`]
    pub fn phase(&self) -> PluginPhase {
        match self {
            Plugin::Router => PluginPhase::Routing,
            Plugin::Copy { .. } => PluginPhase::Copy,
            Plugin::Runtime { .. } => PluginPhase::Runtime,
            Plugin::Summary { .. } => PluginPhase::Report,
            Plugin::Alias { .. } => PluginPhase::Alias,
            Plugin::Replace { .. } => PluginPhase::Replace,
            Plugin::Resolve { .. } => PluginPhase::Resolve,
            Plugin::Json { .. } => PluginPhase::Load,
            Plugin::CommonJs { .. } => PluginPhase::Interop,
            Plugin::Terser { .. } => PluginPhase::Minify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_plugin_tag() {
        let value = serde_json::to_value(Plugin::Summary { is_dom: true }).unwrap();
        assert_eq!(value, json!({ "plugin": "summary", "isDOM": true }));

        let value = serde_json::to_value(Plugin::CommonJs {
            options: PluginConfig::new(),
        })
        .unwrap();
        assert_eq!(value["plugin"], json!("commonjs"));
    }

    #[test]
    fn name_matches_serialized_tag() {
        let plugins = [
            Plugin::Router,
            Plugin::Copy { paths: vec![] },
            Plugin::Json {
                options: PluginConfig::new(),
            },
        ];
        for plugin in plugins {
            let value = serde_json::to_value(&plugin).unwrap();
            assert_eq!(value["plugin"], json!(plugin.name()));
        }
    }
}
