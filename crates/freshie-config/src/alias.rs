//! Path alias resolution.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::options::Options;
use crate::paths::absolutize;

/// Alias pointing at `assets.dir`.
pub const ASSETS_ALIAS: &str = "~assets";
/// Alias pointing at `routes.dir`.
pub const ROUTES_ALIAS: &str = "~routes";
/// Alias pointing at the active UI preset package (SSR builds only).
pub const UI_ALIAS: &str = "~!!ui!!~";

/// Inject the `~assets` / `~routes` aliases and rewrite every alias target
/// to an absolute path rooted at `src`.
///
/// Runs once, after every layer has been merged.
pub fn resolve_aliases(options: &mut Options, src: &Path) -> Result<()> {
    let assets = options.assets.dir.clone();
    let routes = options.routes.dir.clone();

    let entries = &mut options.alias.entries;
    entries.insert(ASSETS_ALIAS.to_string(), assets);
    entries.insert(ROUTES_ALIAS.to_string(), routes);

    for target in entries.values_mut() {
        *target = absolutize(src, target)?;
    }
    Ok(())
}

/// Insert an already-absolute alias (used for package directories).
pub fn insert_alias(options: &mut Options, key: &str, target: PathBuf) {
    options.alias.entries.insert(key.to_string(), target);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injects_special_aliases() {
        let mut options = Options::default();
        resolve_aliases(&mut options, Path::new("/app/src")).unwrap();

        let entries = &options.alias.entries;
        assert_eq!(entries[ASSETS_ALIAS], PathBuf::from("/app/src/assets"));
        assert_eq!(entries[ROUTES_ALIAS], PathBuf::from("/app/src/routes"));
    }

    #[test]
    fn special_aliases_follow_configured_dirs() {
        let mut options = Options::default();
        options.assets.dir = PathBuf::from("media");
        options.routes.dir = PathBuf::from("pages");
        options
            .alias
            .entries
            .insert(ASSETS_ALIAS.into(), PathBuf::from("stale"));

        resolve_aliases(&mut options, Path::new("/app/src")).unwrap();

        let entries = &options.alias.entries;
        assert_eq!(entries[ASSETS_ALIAS], PathBuf::from("/app/src/media"));
        assert_eq!(entries[ROUTES_ALIAS], PathBuf::from("/app/src/pages"));
    }

    #[test]
    fn every_target_becomes_absolute() {
        let mut options = Options::default();
        let entries = &mut options.alias.entries;
        entries.insert("~utils".into(), PathBuf::from("utils"));
        entries.insert("~lib".into(), PathBuf::from("./lib/"));
        entries.insert("~up".into(), PathBuf::from("../shared"));
        entries.insert("~abs".into(), PathBuf::from("/opt/components"));

        resolve_aliases(&mut options, Path::new("/app/src")).unwrap();

        for (key, target) in &options.alias.entries {
            assert!(target.is_absolute(), "{key} -> {}", target.display());
        }
        let entries = &options.alias.entries;
        assert_eq!(entries["~utils"], PathBuf::from("/app/src/utils"));
        assert_eq!(entries["~lib"], PathBuf::from("/app/src/lib"));
        assert_eq!(entries["~up"], PathBuf::from("/app/shared"));
        assert_eq!(entries["~abs"], PathBuf::from("/opt/components"));
    }
}
