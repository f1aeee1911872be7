//! Integration tests for the build command against real project trees.

use freshie_cli::commands::build::{self, MANIFEST_FILE};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read_manifest(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn writes_manifest_to_dest() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/routes/index.js", "");
    write(temp.path(), "src/index.dom.js", "");

    let mut args = freshie_bundler::BuildArgs::new(temp.path());
    args.ssr = false;
    args.dest = "dist".into();

    let manifest = build::run(args).await.unwrap();
    assert_eq!(manifest, temp.path().join("dist").join(MANIFEST_FILE));

    let json = read_manifest(&manifest);
    assert!(json.get("server").is_none());
    assert_eq!(
        json["client"]["input"],
        temp.path().join("src/index.dom.js").display().to_string()
    );
    let names: Vec<&str> = json["client"]["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["plugin"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "router", "copy", "runtime", "summary", "alias", "replace", "resolve", "json",
            "commonjs"
        ]
    );
}

#[tokio::test]
async fn dev_ssr_writes_server_descriptor() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/routes/index.js", "");

    let manifest = build::run(freshie_bundler::BuildArgs::new(temp.path()))
        .await
        .unwrap();

    let json = read_manifest(&manifest);
    assert_eq!(json["options"]["ssr"]["type"], "node");
    assert_eq!(
        json["server"]["output"]["file"],
        temp.path().join("build/server/index.js").display().to_string()
    );
}

#[tokio::test]
async fn missing_routes_writes_nothing() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/index.js", "");

    let err = build::run(freshie_bundler::BuildArgs::new(temp.path()))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("No routes found"));
    assert!(!temp.path().join("build").exists());
}
