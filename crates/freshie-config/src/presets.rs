//! Scoped preset packages.
//!
//! Every `@freshie/*` dependency declared in the project's `package.json` is
//! a preset. Its options live in `node_modules/<name>/config.{toml,json}`.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::discovery::read_value;
use crate::error::{ConfigError, Result};
use crate::merge::Layer;

/// Package scope that marks a dependency as a preset.
pub const SCOPE: &str = "@freshie/";

/// Preset config file names, in lookup order.
pub const PRESET_FILES: &[&str] = &["config.toml", "config.json"];

const DEPENDENCY_FIELDS: &[&str] = &["dependencies", "devDependencies"];

pub struct PresetDiscovery {
    root: PathBuf,
}

impl PresetDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// List the scoped packages declared by the project, sorted by name.
    ///
    /// A project without a `package.json` has no presets.
    pub fn list(&self) -> Result<Vec<String>> {
        let pkg_path = self.root.join("package.json");
        let content = match fs::read_to_string(&pkg_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let parsed: Value = serde_json::from_str(&content)
            .map_err(|e| ConfigError::invalid("package.json", format!("Invalid JSON: {e}")))?;

        let names: BTreeSet<String> = DEPENDENCY_FIELDS
            .iter()
            .filter_map(|field| parsed.get(field).and_then(Value::as_object))
            .flat_map(|deps| deps.keys())
            .filter(|name| name.starts_with(SCOPE))
            .cloned()
            .collect();

        Ok(names.into_iter().collect())
    }

    /// Installed location of a package
    pub fn package_dir(&self, name: &str) -> PathBuf {
        self.root.join("node_modules").join(name)
    }

    /// Load a preset's options as a layer.
    ///
    /// # Errors
    ///
    /// Fails when the package has no config file or the file cannot be parsed.
    pub fn load(&self, name: &str) -> Result<Layer> {
        let dir = self.package_dir(name);
        let path = PRESET_FILES
            .iter()
            .map(|file| dir.join(file))
            .find(|path| path.is_file())
            .ok_or_else(|| ConfigError::PresetNotFound {
                name: name.to_string(),
                dir: dir.clone(),
            })?;

        let value = read_value(&path).map_err(|e| ConfigError::PresetLoad {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        Layer::from_value(name, value).map_err(|e| ConfigError::PresetLoad {
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_without_package_json_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(PresetDiscovery::new(dir.path()).list().unwrap().is_empty());
    }

    #[test]
    fn list_collects_scoped_deps_sorted_and_unique() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{
                "dependencies": { "@freshie/ui.preact": "^1", "preact": "^10" },
                "devDependencies": { "@freshie/ssr.node": "^1", "@freshie/ui.preact": "^1" }
            }"#,
        )
        .unwrap();

        let names = PresetDiscovery::new(dir.path()).list().unwrap();
        assert_eq!(names, vec!["@freshie/ssr.node", "@freshie/ui.preact"]);
    }

    #[test]
    fn load_missing_preset_fails() {
        let dir = TempDir::new().unwrap();
        let err = PresetDiscovery::new(dir.path())
            .load("@freshie/ssr.node")
            .unwrap_err();
        assert!(matches!(err, ConfigError::PresetNotFound { name, .. } if name == "@freshie/ssr.node"));
    }

    #[test]
    fn load_reports_parse_failures() {
        let dir = TempDir::new().unwrap();
        let pkg = dir.path().join("node_modules/@freshie/broken");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("config.json"), "{ nope").unwrap();

        let err = PresetDiscovery::new(dir.path())
            .load("@freshie/broken")
            .unwrap_err();
        assert!(matches!(err, ConfigError::PresetLoad { .. }));
    }
}
