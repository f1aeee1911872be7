//! Error types for option loading, merging and preset discovery.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Preset discovery/loading errors (always fatal)
    #[error("preset '{name}' has no config file in {}", .dir.display())]
    PresetNotFound { name: String, dir: PathBuf },

    #[error("failed to load preset '{name}': {message}")]
    PresetLoad { name: String, message: String },

    // Config parsing errors
    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid config value for '{field}'{}", hint_suffix(.hint))]
    InvalidValue { field: String, hint: Option<String> },

    #[error("config layer must be an object, got {0}")]
    NotAnObject(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(": {hint}"),
        None => String::new(),
    }
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, err: impl std::fmt::Display) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            hint: Some(err.to_string()),
        }
    }
}
