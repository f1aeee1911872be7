//! File-based config discovery
//!
//! Finds the project config in the working directory and turns it into a
//! [`Layer`]. A project without a config file is valid.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::merge::Layer;

/// Project config file names, in lookup order.
pub const CONFIG_FILES: &[&str] = &["freshie.config.toml", "freshie.config.json"];

/// Field read from `package.json` when no config file exists.
pub const PACKAGE_FIELD: &str = "freshie";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use freshie_config::ConfigDiscovery;
///
/// let layer = ConfigDiscovery::new(".").load().unwrap();
/// if let Some(layer) = layer {
///     println!("using {}", layer.name());
/// }
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. freshie.config.toml
    /// 2. freshie.config.json
    /// 3. package.json (freshie field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in CONFIG_FILES {
            let path = self.root.join(name);
            if path.is_file() {
                return Some(path);
            }
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        match parsed.get(PACKAGE_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load the project layer, or `None` when the project has no config
    pub fn load(&self) -> Result<Option<Layer>> {
        let Some(path) = self.find() else {
            return Ok(None);
        };
        let name = display_name(&path);

        if path.file_name() == Some(OsStr::new("package.json")) {
            let parsed = read_value(&path)?;
            let field = parsed
                .get(PACKAGE_FIELD)
                .cloned()
                .ok_or_else(|| ConfigError::InvalidValue {
                    field: PACKAGE_FIELD.to_string(),
                    hint: Some("Add a 'freshie' field to your package.json".to_string()),
                })?;
            return Layer::from_value(name, field).map(Some);
        }

        Layer::from_value(name, read_value(&path)?).map(Some)
    }
}

/// Parse a TOML or JSON file into a JSON value.
pub fn read_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    let field = display_name(path);

    match path.extension().and_then(OsStr::to_str) {
        Some("toml") => {
            let toml_val: toml::Value = toml::from_str(&content)
                .map_err(|e| ConfigError::invalid(&field, format!("Invalid TOML syntax: {e}")))?;
            serde_json::to_value(toml_val).map_err(|e| {
                ConfigError::invalid(&field, format!("TOML to JSON conversion failed: {e}"))
            })
        }
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| ConfigError::invalid(&field, format!("Invalid JSON: {e}"))),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
