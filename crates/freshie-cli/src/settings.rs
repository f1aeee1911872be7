//! Layering of build settings.
//!
//! Priority: CLI flags > `FRESHIE_*` environment variables > defaults.
//! Project options (routes, aliases, plugins) are not settings; they come
//! from presets and the project config during loading.

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};

pub const ENV_PREFIX: &str = "FRESHIE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    pub src: PathBuf,
    pub dest: PathBuf,
    pub prod: bool,
    pub ssr: bool,
    pub minify: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cwd: None,
            src: PathBuf::from("src"),
            dest: PathBuf::from("build"),
            prod: false,
            ssr: true,
            minify: false,
        }
    }
}

/// Only the flags actually given on the command line
#[derive(Debug, Default, Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    cwd: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    src: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dest: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prod: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ssr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minify: Option<bool>,
}

impl From<&ProjectArgs> for Overrides {
    fn from(args: &ProjectArgs) -> Self {
        Self {
            cwd: args.cwd.clone(),
            src: args.src.clone(),
            dest: args.dest.clone(),
            prod: args.prod.then_some(true),
            ssr: args.ssr_flag(),
            minify: args.minify.then_some(true),
        }
    }
}

impl Settings {
    pub fn load(args: &ProjectArgs) -> Result<Self> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(Overrides::from(args)))
            .extract()
            .map_err(|e| CliError::InvalidArgument(e.to_string()))
    }

    /// Convert into loader arguments, defaulting `cwd` to the process's
    /// working directory.
    pub fn into_build_args(self) -> Result<freshie_bundler::BuildArgs> {
        let cwd = match self.cwd {
            Some(cwd) => cwd,
            None => std::env::current_dir()?,
        };
        Ok(freshie_bundler::BuildArgs {
            src: self.src,
            dest: self.dest,
            is_prod: self.prod,
            ssr: self.ssr,
            minify: self.minify,
            ..freshie_bundler::BuildArgs::new(cwd)
        })
    }
}
