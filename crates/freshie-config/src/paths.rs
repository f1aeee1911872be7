use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::error::Result;

/// Resolve `path` against `base`, producing an absolute, lexically clean path.
///
/// Absolute inputs are only cleaned. A relative `base` is itself anchored at
/// the process working directory.
pub fn absolutize(base: &Path, path: &Path) -> Result<PathBuf> {
    let joined = base.join(path);
    if joined.is_absolute() {
        return Ok(joined.clean());
    }
    Ok(std::env::current_dir()?.join(joined).clean())
}
