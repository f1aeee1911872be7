//! Plugin registry with execution phases.
//!
//! The registry keeps plugins sorted by phase so that alias resolution always
//! precedes module resolution, replacement precedes minification, and so on,
//! no matter when a plugin is added. Plugins sharing a phase keep insertion
//! order.

use serde::{Deserialize, Serialize};

use super::Plugin;

/// Plugin execution phases
///
/// Plugins are executed in phase order (lower numbers first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PluginPhase {
    /// Router runtime (client only)
    Routing = 0,

    /// Static file copying
    Copy = 10,

    /// Route manifest injection
    Runtime = 20,

    /// Build summary reporting
    Report = 30,

    /// Alias resolution; must run before module resolution
    Alias = 40,

    /// Token replacement; must run before minification
    Replace = 50,

    /// Module resolution
    Resolve = 60,

    /// Non-JS module loading (JSON)
    Load = 70,

    /// CommonJS interop (client only)
    Interop = 80,

    /// Minification (always last)
    Minify = 100,
}

/// Plugin list that maintains phase order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Plugin>", into = "Vec<Plugin>")]
pub struct PluginRegistry {
    plugins: Vec<Plugin>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a plugin after every plugin of the same or an earlier phase
    pub fn add(&mut self, plugin: Plugin) {
        let phase = plugin.phase();
        let at = self.plugins.partition_point(|p| p.phase() <= phase);
        self.plugins.insert(at, plugin);
    }

    /// Remove every plugin with the given name, returning how many were removed
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.plugins.len();
        self.plugins.retain(|p| p.name() != name);
        before - self.plugins.len()
    }

    pub fn get(&self, name: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|p| p.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Plugin> {
        self.plugins.iter_mut().find(|p| p.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Plugin> {
        self.plugins.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(Plugin::name).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl From<Vec<Plugin>> for PluginRegistry {
    fn from(plugins: Vec<Plugin>) -> Self {
        let mut registry = Self::new();
        for plugin in plugins {
            registry.add(plugin);
        }
        registry
    }
}

impl From<PluginRegistry> for Vec<Plugin> {
    fn from(registry: PluginRegistry) -> Self {
        registry.plugins
    }
}

impl<'a> IntoIterator for &'a PluginRegistry {
    type Item = &'a Plugin;
    type IntoIter = std::slice::Iter<'a, Plugin>;

    fn into_iter(self) -> Self::IntoIter {
        self.plugins.iter()
    }
}
