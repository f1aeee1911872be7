//! Option model and config sources for freshie.
//!
//! Options are assembled from three kinds of [`Layer`]: defaults, scoped
//! presets ([`PresetDiscovery`]) and the project config
//! ([`ConfigDiscovery`]). Layers merge in that order with [`merge`], then
//! [`resolve_aliases`] anchors every alias at the source directory.

pub mod alias;
pub mod context;
pub mod discovery;
pub mod error;
pub mod merge;
pub mod options;
pub mod paths;
pub mod presets;

pub use alias::{ASSETS_ALIAS, ROUTES_ALIAS, UI_ALIAS, insert_alias, resolve_aliases};
pub use context::Context;
pub use discovery::{CONFIG_FILES, ConfigDiscovery, read_value};
pub use error::{ConfigError, Result};
pub use merge::{BUNDLE_KEY, CustomizeFn, Layer, Patch, is_truthy, merge};
pub use options::{AliasOptions, AssetOptions, Options, PluginConfig, RouteOptions, SsrOptions};
pub use paths::absolutize;
pub use presets::{PresetDiscovery, SCOPE};
