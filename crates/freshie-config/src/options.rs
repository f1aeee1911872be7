//! The option record every config layer writes into.
//!
//! Options start from [`Options::default`] and are overwritten, key by key,
//! by presets and then by the project config. Each top-level field is one
//! merge unit: a layer that sets `assets` replaces the whole `assets` section.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};

/// Free-form options forwarded untouched to a bundler plugin.
pub type PluginConfig = Map<String, Value>;

/// Main option record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Path aliases for import resolution (e.g., "~components" → "components")
    pub alias: AliasOptions,

    /// Static asset directory, exposed as the `~assets` alias
    pub assets: AssetOptions,

    /// Route discovery settings, exposed as the `~routes` alias
    pub routes: RouteOptions,

    /// Directories copied verbatim into the client output
    pub copy: Vec<PathBuf>,

    /// String replacements applied to bundled code
    pub replace: IndexMap<String, String>,

    /// Server-side rendering target
    pub ssr: SsrOptions,

    /// Module resolution plugin options
    pub resolve: PluginConfig,

    /// JSON loader plugin options
    pub json: PluginConfig,

    /// CommonJS interop plugin options (client only)
    pub commonjs: PluginConfig,

    /// Minifier options, used when minification is enabled
    pub terser: PluginConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasOptions {
    pub entries: IndexMap<String, PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetOptions {
    pub dir: PathBuf,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Directory (relative to the source dir) scanned for route files
    pub dir: PathBuf,

    /// File extensions recognised as routes, without the leading dot
    pub extensions: Vec<String>,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("routes"),
            extensions: ["js", "jsx", "ts", "tsx", "mjs", "svelte", "vue"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SsrOptions {
    /// Server runtime ("node", "worker", ...); `None` disables the server bundle
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Fallback server entry when the source dir has no `index.ssr.*` file
    pub entry: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            alias: AliasOptions::default(),
            assets: AssetOptions::default(),
            routes: RouteOptions::default(),
            copy: vec![PathBuf::from("static")],
            replace: IndexMap::new(),
            ssr: SsrOptions::default(),
            resolve: PluginConfig::new(),
            json: PluginConfig::new(),
            commonjs: PluginConfig::new(),
            terser: PluginConfig::new(),
        }
    }
}

impl Options {
    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use freshie_config::Options;
    /// use serde_json::json;
    ///
    /// let options = Options::from_value(json!({ "assets": { "dir": "img" } })).unwrap();
    /// assert_eq!(options.assets.dir, std::path::PathBuf::from("img"));
    /// assert_eq!(options.routes.dir, std::path::PathBuf::from("routes"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::invalid("options", e))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid("options", e))
    }
}
