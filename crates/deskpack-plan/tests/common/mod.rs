//! Fixture projects shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const PACKAGE_JSON: &str = r#"{
  "name": "desk-app",
  "dependencies": {
    "axios": "^0.18.0",
    "react": "^16.4.0",
    "react-dom": "^16.4.0"
  }
}"#;

/// A project with `src/start.js`, a static directory and a manifest.
pub fn project() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "src/start.js", "console.log('start')");
    write(dir.path(), "static/.gitkeep", "");
    write(dir.path(), "package.json", PACKAGE_JSON);
    dir
}

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(path, content).expect("write fixture");
}
