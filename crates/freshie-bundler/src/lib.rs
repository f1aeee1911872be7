//! Bundle descriptor assembly for freshie.
//!
//! [`Loader::load`] runs the whole pipeline for one build invocation:
//!
//! 1. merge presets and the project config into [`Options`](freshie_config::Options)
//! 2. resolve aliases against the source directory
//! 3. discover routes (none is fatal)
//! 4. assemble the client [`BundleConfig`]
//! 5. decide SSR and, when active, assemble the server [`BundleConfig`]
//! 6. auto-detect entry files
//! 7. run the collected [`Customizer`]s over both descriptors
//!
//! The descriptors only *describe* plugin pipelines; executing them is the
//! bundler driver's job.

pub mod args;
pub mod assemble;
pub mod customize;
pub mod descriptor;
pub mod entries;
pub mod error;
pub mod loader;
pub mod plugins;
pub mod routes;
pub mod ssr;

pub use args::BuildArgs;
pub use customize::{BundleFn, Customizer};
pub use descriptor::{
    BundleConfig, ConfigGroup, EntrySignatures, OutputOptions, SignaturePolicy, Treeshake,
    TreeshakeOptions,
};
pub use error::{BuildError, Result};
pub use loader::{Loader, Preset};
pub use plugins::{Plugin, PluginPhase, PluginRegistry};
pub use routes::{Route, discover_routes};
