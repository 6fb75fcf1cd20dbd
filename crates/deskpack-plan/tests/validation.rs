//! Tests for configuration validation.

use deskpack_plan::{ConfigValidator, FsValidator, PlanError, ProjectConfig, validate_fs};
use std::fs;
use tempfile::TempDir;

#[test]
fn validate_catches_missing_entry() {
    let dir = TempDir::new().expect("tempdir");
    let cfg = ProjectConfig::new(dir.path()).with_entry("main", "src/nonexistent.js");

    let result = FsValidator::new(dir.path()).validate(&cfg);
    match result.unwrap_err() {
        PlanError::EntryNotFound { path } => {
            assert!(path.ends_with("src/nonexistent.js"));
        }
        _ => panic!("expected EntryNotFound error"),
    }
}

#[test]
fn validate_succeeds_when_entry_exists() {
    let dir = TempDir::new().expect("tempdir");
    let src_dir = dir.path().join("src");
    fs::create_dir(&src_dir).expect("create src dir");
    fs::write(src_dir.join("start.js"), "export {};").expect("write entry");

    let cfg = ProjectConfig::new(dir.path()).with_entry("main", "src/start.js");
    assert!(validate_fs(&cfg).is_ok());
}

#[test]
fn directory_entry_is_not_a_file() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir_all(dir.path().join("src/start.js")).expect("create dir");

    let cfg = ProjectConfig::new(dir.path()).with_entry("main", "src/start.js");
    assert!(matches!(
        validate_fs(&cfg).unwrap_err(),
        PlanError::EntryNotFound { .. }
    ));
}

#[test]
fn schema_errors_come_before_filesystem_checks() {
    let dir = TempDir::new().expect("tempdir");
    let mut cfg = ProjectConfig::new(dir.path()).with_entry("main", "src/missing.js");
    cfg.extensions = vec!["js".to_string()];

    assert!(matches!(
        validate_fs(&cfg).unwrap_err(),
        PlanError::SchemaValidation { .. }
    ));
}
