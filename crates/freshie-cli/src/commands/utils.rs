//! Shared helpers for command implementations.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{CliError, Result, ResultExt};

/// Create `dir` (and parents) unless it already exists as a directory.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Output path exists but is not a directory: {}",
            dir.display()
        )));
    }
    fs::create_dir_all(dir).with_path(dir)
}

/// Write `value` as pretty JSON with a trailing newline.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json)
        .with_path(path)
        .context(format!("Failed to write {}", path.display()))
}
