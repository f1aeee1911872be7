//! Error types for bundle assembly.

use std::path::PathBuf;

use freshie_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

#[derive(Debug, Error)]
pub enum BuildError {
    /// Route discovery found nothing to bundle
    #[error("No routes found in {}", .0.display())]
    NoRoutes(PathBuf),

    /// Option loading, merging or preset failure
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A bundle customizer produced an invalid descriptor
    #[error("customizer from '{source_name}' failed: {message}")]
    Customize { source_name: String, message: String },

    /// Blocking scan task could not complete
    #[error("background task failed: {0}")]
    Join(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
