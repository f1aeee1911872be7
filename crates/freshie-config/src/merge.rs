//! Layer merging.
//!
//! A [`Layer`] is one config source (a preset, the project config, or a
//! programmatic override). Layers are merged into [`Options`] in discovery
//! order, one top-level key at a time:
//!
//! - a [`Patch::Customize`] callback receives the current section (an empty
//!   object when the section is unset or falsy) and mutates it in place
//! - a [`Patch::Value`] replaces the section, but only when it is truthy
//!
//! The `bundle` key is never merged; it holds a bundle customizer and is
//! collected separately by the loader.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::warn;

use crate::context::Context;
use crate::error::{ConfigError, Result};
use crate::options::Options;

/// Key reserved for bundle customizers.
pub const BUNDLE_KEY: &str = "bundle";

/// Callback form of a patch: `(existing_section, context)`.
pub type CustomizeFn = Arc<dyn Fn(&mut Value, &Context) + Send + Sync>;

#[derive(Clone)]
pub enum Patch {
    /// Replace the section when truthy
    Value(Value),
    /// Mutate the existing section in place
    Customize(CustomizeFn),
}

impl fmt::Debug for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Patch::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Patch::Customize(_) => f.write_str("Customize(..)"),
        }
    }
}

/// One configuration source.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    name: String,
    patches: IndexMap<String, Patch>,
    bundle: Option<Value>,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            patches: IndexMap::new(),
            bundle: None,
        }
    }

    /// Build a layer from a parsed config file.
    ///
    /// The object's `bundle` entry, if any, is split off as a declarative
    /// bundle customizer.
    ///
    /// # Example
    ///
    /// ```
    /// use freshie_config::Layer;
    /// use serde_json::json;
    ///
    /// let layer = Layer::from_value("freshie.config.json", json!({
    ///     "copy": ["public"],
    ///     "bundle": { "output": { "sourcemap": true } }
    /// })).unwrap();
    ///
    /// assert_eq!(layer.len(), 1);
    /// assert!(layer.bundle().is_some());
    /// ```
    pub fn from_value(name: impl Into<String>, value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(ConfigError::NotAnObject(kind_of(&value).to_string()));
        };

        let mut layer = Layer::new(name);
        for (key, value) in map {
            if key == BUNDLE_KEY {
                layer.bundle = Some(value);
            } else {
                layer.patches.insert(key, Patch::Value(value));
            }
        }
        Ok(layer)
    }

    /// Set a plain value for a top-level key
    pub fn set(mut self, key: impl Into<String>, value: Value) -> Self {
        self.patches.insert(key.into(), Patch::Value(value));
        self
    }

    /// Register a callback for a top-level key
    pub fn customize<F>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut Value, &Context) + Send + Sync + 'static,
    {
        self.patches.insert(key.into(), Patch::Customize(Arc::new(f)));
        self
    }

    /// Attach a declarative bundle customizer
    pub fn with_bundle(mut self, patch: Value) -> Self {
        self.bundle = Some(patch);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bundle(&self) -> Option<&Value> {
        self.bundle.as_ref()
    }

    pub fn patches(&self) -> impl Iterator<Item = (&str, &Patch)> {
        self.patches.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}

/// Merge a layer into `options`.
///
/// Keys that do not name an option section are skipped with a warning.
pub fn merge(options: &mut Options, layer: &Layer, context: &Context) -> Result<()> {
    let mut base = options.to_value()?;
    let map = base
        .as_object_mut()
        .ok_or_else(|| ConfigError::NotAnObject("options".to_string()))?;

    for (key, patch) in &layer.patches {
        if key == BUNDLE_KEY {
            continue;
        }
        if !map.contains_key(key) {
            warn!(layer = %layer.name, key = %key, "ignoring unknown config key");
            continue;
        }

        match patch {
            Patch::Customize(f) => {
                let slot = map.entry(key.clone()).or_insert(Value::Null);
                if !is_truthy(slot) {
                    *slot = Value::Object(Map::new());
                }
                f(slot, context);
            }
            Patch::Value(value) => {
                if is_truthy(value) {
                    map.insert(key.clone(), value.clone());
                }
            }
        }
    }

    *options = Options::from_value(base).map_err(|err| match err {
        ConfigError::InvalidValue { hint, .. } => ConfigError::InvalidValue {
            field: layer.name.clone(),
            hint,
        },
        other => other,
    })?;
    Ok(())
}

/// JavaScript truthiness for JSON values.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn truthiness_follows_javascript() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(-1)));
    }

    #[test]
    fn falsy_values_keep_base() {
        let mut options = Options::default();
        let layer = Layer::new("test")
            .set("copy", json!(null))
            .set("assets", json!(false));

        merge(&mut options, &layer, &Context::default()).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn truthy_values_replace_whole_section() {
        let mut options = Options::default();
        let layer = Layer::new("test").set("copy", json!(["public", "fonts"]));

        merge(&mut options, &layer, &Context::default()).unwrap();
        assert_eq!(
            options.copy,
            vec![PathBuf::from("public"), PathBuf::from("fonts")]
        );
    }

    #[test]
    fn customize_receives_existing_section_and_context() {
        let mut options = Options::default();
        options.replace.insert("__VERSION__".into(), "1".into());

        let layer = Layer::new("test").customize("replace", |section, ctx| {
            assert!(section.get("__VERSION__").is_some());
            section["__PROD__"] = json!(ctx.is_prod.to_string());
        });

        merge(&mut options, &layer, &Context::new(true)).unwrap();
        assert_eq!(options.replace["__VERSION__"], "1");
        assert_eq!(options.replace["__PROD__"], "true");
    }

    #[test]
    fn customize_on_unset_section_starts_empty() {
        let mut options = Options::default();
        let layer = Layer::new("test").customize("terser", |section, _| {
            assert_eq!(section, &json!({}));
            section["mangle"] = json!(false);
        });

        merge(&mut options, &layer, &Context::default()).unwrap();
        assert_eq!(options.terser["mangle"], json!(false));
    }

    #[test]
    fn bundle_key_is_never_merged() {
        let mut options = Options::default();
        let layer = Layer::new("test").set(BUNDLE_KEY, json!({ "input": "x.js" }));

        merge(&mut options, &layer, &Context::default()).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let mut options = Options::default();
        let layer = Layer::new("test").set("nonsense", json!(1));

        merge(&mut options, &layer, &Context::default()).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn invalid_section_reports_layer_name() {
        let mut options = Options::default();
        let layer = Layer::new("freshie.config.json").set("copy", json!("static"));

        let err = merge(&mut options, &layer, &Context::default()).unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => assert_eq!(field, "freshie.config.json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_value_rejects_non_objects() {
        let err = Layer::from_value("x", json!([1, 2])).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnObject(kind) if kind == "array"));
    }
}
