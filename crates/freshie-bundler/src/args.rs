use std::path::{Path, PathBuf};

use freshie_config::absolutize;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Per-invocation build inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildArgs {
    /// Project root; config, `package.json` and `node_modules` live here
    pub cwd: PathBuf,

    /// Source directory, relative to `cwd` unless absolute
    pub src: PathBuf,

    /// Output directory, relative to `cwd` unless absolute
    pub dest: PathBuf,

    pub is_prod: bool,

    /// Request a server-side rendering bundle
    pub ssr: bool,

    pub minify: bool,
}

impl BuildArgs {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            src: PathBuf::from("src"),
            dest: PathBuf::from("build"),
            is_prod: false,
            ssr: true,
            minify: false,
        }
    }

    /// Anchor `cwd`, `src` and `dest` as absolute paths.
    pub fn resolved(&self) -> Result<Self> {
        let cwd = absolutize(&self.cwd, Path::new(""))?;
        Ok(Self {
            src: absolutize(&cwd, &self.src)?,
            dest: absolutize(&cwd, &self.dest)?,
            cwd,
            ..self.clone()
        })
    }
}
