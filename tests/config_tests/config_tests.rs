//! Tests for Config
//!
//! These tests verify loading the JSON config file and the builder defaults.

use std::fs;
use std::path::PathBuf;

use filestash::config::{Config, DEFAULT_LISTEN_ADDR, DEFAULT_MAX_BODY_BYTES};
use filestash::StashError;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, contents).unwrap();
    path
}

// =============================================================================
// Loading Tests
// =============================================================================

#[test]
fn test_load_minimal_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"storage_dir": "/var/lib/filestash"}"#);

    let config = Config::load(&path).unwrap();

    assert_eq!(config.storage_dir, PathBuf::from("/var/lib/filestash"));
    assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
}

#[test]
fn test_load_relative_storage_dir() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"storage_dir": "Storage"}"#);

    let config = Config::load(&path).unwrap();

    assert_eq!(config.storage_dir, PathBuf::from("Storage"));
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{"storage_dir": "data", "listen_addr": "127.0.0.1:9000", "max_body_bytes": 1024}"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.listen_addr, "127.0.0.1:9000");
    assert_eq!(config.max_body_bytes, 1024);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();

    let result = Config::load(&dir.path().join("nope.json"));

    assert!(matches!(result, Err(StashError::Config(_))));
}

#[test]
fn test_load_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{ storage_dir: ");

    let result = Config::load(&path);

    assert!(matches!(result, Err(StashError::Config(_))));
}

#[test]
fn test_load_missing_storage_dir() {
    let result = Config::from_json(r#"{"listen_addr": "0.0.0.0:8080"}"#);
    assert!(matches!(result, Err(StashError::Config(_))));
}

#[test]
fn test_load_empty_storage_dir() {
    let result = Config::from_json(r#"{"storage_dir": ""}"#);
    assert!(matches!(result, Err(StashError::Config(_))));
}

// =============================================================================
// Builder Tests
// =============================================================================

#[test]
fn test_builder_overrides_defaults() {
    let config = Config::builder()
        .storage_dir("/tmp/x")
        .listen_addr("127.0.0.1:1")
        .max_body_bytes(7)
        .build();

    assert_eq!(config.storage_dir, PathBuf::from("/tmp/x"));
    assert_eq!(config.listen_addr, "127.0.0.1:1");
    assert_eq!(config.max_body_bytes, 7);
}
