//! File-system route discovery.
//!
//! Every file under `<src>/<routes.dir>` with a route extension becomes a
//! [`Route`]. Path segments map to URL patterns:
//!
//! - `index` files collapse into their directory (`blog/index.js` → `/blog`)
//! - `[slug]` becomes a named parameter (`/blog/:slug`)
//! - `[...rest]` becomes a wildcard (`/docs/*`)
//!
//! Entries whose name starts with `_` or `.` are private and skipped.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use freshie_config::RouteOptions;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{BuildError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Absolute path of the route module
    pub file: PathBuf,

    /// URL pattern, e.g. `/blog/:slug`
    pub pattern: String,

    /// Parameter names in pattern order (`"*"` segments contribute their name)
    pub keys: Vec<String>,

    /// Pattern ends in a catch-all segment
    pub wild: bool,
}

impl Route {
    /// Build a route from a path relative to the routes directory.
    ///
    /// Returns `None` for private files.
    pub fn from_relative(root: &Path, relative: &Path) -> Option<Self> {
        let mut segments = Vec::new();
        let mut keys = Vec::new();
        let mut wild = false;

        let mut parts: Vec<&str> = relative
            .parent()
            .into_iter()
            .flat_map(Path::components)
            .filter_map(|c| c.as_os_str().to_str())
            .collect();
        parts.push(relative.file_stem().and_then(OsStr::to_str)?);

        let last = parts.len() - 1;
        for (idx, part) in parts.into_iter().enumerate() {
            if is_private(part) {
                return None;
            }
            if idx == last && part == "index" {
                continue;
            }

            if let Some(name) = part.strip_prefix("[...").and_then(|p| p.strip_suffix(']')) {
                wild = true;
                keys.push(name.to_string());
                segments.push("*".to_string());
            } else if let Some(name) = part.strip_prefix('[').and_then(|p| p.strip_suffix(']')) {
                keys.push(name.to_string());
                segments.push(format!(":{name}"));
            } else {
                segments.push(part.to_string());
            }
        }

        Some(Self {
            file: root.join(relative),
            pattern: format!("/{}", segments.join("/")),
            keys,
            wild,
        })
    }

    /// Ordering key: static routes first, then fewer parameters, wildcards last.
    fn rank(&self) -> (bool, usize, &str) {
        (self.wild, self.keys.len(), &self.pattern)
    }
}

fn is_private(name: &str) -> bool {
    name.starts_with('_') || name.starts_with('.')
}

fn is_visible(entry: &DirEntry) -> bool {
    entry.depth() == 0 || entry.file_name().to_str().is_some_and(|name| !is_private(name))
}

/// Scan `<src>/<options.dir>` for route files.
///
/// A missing routes directory yields an empty list; the caller decides
/// whether that is fatal.
pub async fn discover_routes(src: &Path, options: &RouteOptions) -> Result<Vec<Route>> {
    let root = src.join(&options.dir);
    let extensions = options.extensions.clone();

    tokio::task::spawn_blocking(move || scan(&root, &extensions))
        .await
        .map_err(|e| BuildError::Join(e.to_string()))?
}

fn scan(root: &Path, extensions: &[String]) -> Result<Vec<Route>> {
    if !root.is_dir() {
        debug!(dir = %root.display(), "routes directory does not exist");
        return Ok(Vec::new());
    }

    let mut routes = Vec::new();
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(is_visible)
    {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let matches_ext = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| extensions.iter().any(|e| e == ext));
        if !matches_ext {
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if let Some(route) = Route::from_relative(root, relative) {
            debug!(pattern = %route.pattern, file = %relative.display(), "discovered route");
            routes.push(route);
        }
    }

    routes.sort_by(|a, b| a.rank().cmp(&b.rank()));
    dedup_patterns(&mut routes);
    Ok(routes)
}

/// Keep the first route for each pattern. Expects `routes` sorted by rank,
/// which places equal patterns next to each other.
fn dedup_patterns(routes: &mut Vec<Route>) {
    routes.dedup_by(|later, kept| {
        if later.pattern != kept.pattern {
            return false;
        }
        warn!(
            pattern = %kept.pattern,
            kept = %kept.file.display(),
            skipped = %later.file.display(),
            "duplicate route pattern"
        );
        true
    });
}
