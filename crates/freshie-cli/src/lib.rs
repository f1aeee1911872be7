//! freshie CLI - assembles client and SSR bundle descriptors for a project.
//!
//! The heavy lifting lives in `freshie-bundler`; this crate adds:
//!
//! - [`cli`] - clap argument definitions
//! - [`settings`] - layering of defaults, `FRESHIE_*` variables and flags
//! - [`commands`] - `build` and `inspect`
//! - [`error`] - CLI error type and miette rendering
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines and the build summary

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod settings;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
