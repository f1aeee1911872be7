//! Bundle customizers collected from config layers.

use std::fmt;
use std::sync::Arc;

use freshie_config::{Context, Options};
use serde_json::Value;

use crate::descriptor::BundleConfig;
use crate::error::{BuildError, Result};

/// Programmatic customizer: `(bundle, options, context)`.
pub type BundleFn = Arc<dyn Fn(&mut BundleConfig, &Options, &Context) + Send + Sync>;

#[derive(Clone)]
pub enum Customizer {
    /// Declarative patch deep-merged into the serialized descriptor
    Patch { source: String, patch: Value },
    /// Callback mutating the descriptor directly
    Func { source: String, f: BundleFn },
}

impl fmt::Debug for Customizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Customizer::Patch { source, patch } => f
                .debug_struct("Patch")
                .field("source", source)
                .field("patch", patch)
                .finish(),
            Customizer::Func { source, .. } => {
                f.debug_struct("Func").field("source", source).finish()
            }
        }
    }
}

impl Customizer {
    pub fn patch(source: impl Into<String>, patch: Value) -> Self {
        Customizer::Patch {
            source: source.into(),
            patch,
        }
    }

    pub fn func<F>(source: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut BundleConfig, &Options, &Context) + Send + Sync + 'static,
    {
        Customizer::Func {
            source: source.into(),
            f: Arc::new(f),
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Customizer::Patch { source, .. } | Customizer::Func { source, .. } => source,
        }
    }

    pub fn apply(&self, bundle: &mut BundleConfig, options: &Options, context: &Context) -> Result<()> {
        match self {
            Customizer::Func { f, .. } => {
                f(bundle, options, context);
                Ok(())
            }
            Customizer::Patch { source, patch } => {
                let fail = |e: serde_json::Error| BuildError::Customize {
                    source_name: source.clone(),
                    message: e.to_string(),
                };
                let mut base = serde_json::to_value(&*bundle).map_err(fail)?;
                merge_values(&mut base, patch);
                *bundle = serde_json::from_value(base).map_err(fail)?;
                Ok(())
            }
        }
    }
}

/// Objects merge key by key; every other value replaces the target.
fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
