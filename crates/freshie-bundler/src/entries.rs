//! Entry file auto-detection in the source directory.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Client entry: `index.js`, `index.dom.tsx`, ...
pub static CLIENT_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^index\.(dom\.)?[tjm]sx?$").expect("valid client entry pattern"));

/// Server entry: `index.ssr.js`, `index.ssr.ts`, ...
pub static SSR_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^index\.ssr\.[tjm]sx?$").expect("valid ssr entry pattern"));

/// Names of the regular files directly inside `dir`, sorted.
pub async fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            files.push(name.to_string());
        }
    }

    files.sort();
    Ok(files)
}

/// First file name matching `pattern`.
pub fn find_match<'a>(files: &'a [String], pattern: &Regex) -> Option<&'a str> {
    files
        .iter()
        .map(String::as_str)
        .find(|name| pattern.is_match(name))
}
