//! Tests for config loading and accessors.

use crate::config::{Config, load_config};
use crate::test_support::with_captured_logs;
use serde::Deserialize;
use serde_json::json;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("script.json");
    std::fs::write(&path, content).unwrap();
    path
}

fn config_from(value: serde_json::Value) -> Config {
    match value {
        serde_json::Value::Object(map) => Config::from_map(map),
        other => panic!("not an object: {other}"),
    }
}

#[test]
fn test_missing_file_yields_empty_config_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let (config, logs) = with_captured_logs(false, || load_config(&path));

    assert!(config.is_empty());
    assert!(logs.contents().contains("WARN - Configuration file"));
    assert!(logs.contents().contains("not found, using defaults"));
}

#[test]
fn test_invalid_json_yields_empty_config_with_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{ \"timeout\": 30, ");

    let (config, logs) = with_captured_logs(false, || load_config(&path));

    assert!(config.is_empty());
    assert!(logs.contents().contains("ERROR - Invalid JSON in configuration file"));
}

#[test]
fn test_empty_file_is_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    assert!(load_config(&path).is_empty());
}

#[test]
fn test_non_object_json_yields_empty_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[1, 2, 3]");

    let (config, logs) = with_captured_logs(false, || load_config(&path));

    assert!(config.is_empty());
    assert!(logs.contents().contains("expected a JSON object, found an array"));
}

#[test]
fn test_unreadable_path_yields_empty_config() {
    // A directory exists but cannot be read as a file.
    let dir = TempDir::new().unwrap();

    let (config, logs) = with_captured_logs(false, || load_config(dir.path()));

    assert!(config.is_empty());
    assert!(logs.contents().contains("ERROR - Error reading configuration file"));
}

#[test]
fn test_invalid_utf8_yields_empty_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.json");
    std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    assert!(load_config(&path).is_empty());
}

#[test]
fn test_valid_object_round_trips_all_pairs() {
    let dir = TempDir::new().unwrap();
    let expected = json!({
        "timeout": 30,
        "enable_feature": true,
        "name": "demo",
        "ratio": 0.5,
        "nothing": null,
        "tags": ["a", "b"],
        "nested": { "depth": 2 }
    });
    let path = write_config(&dir, &expected.to_string());

    let (config, logs) = with_captured_logs(true, || load_config(&path));

    assert_eq!(config, config_from(expected.clone()));
    assert_eq!(config.len(), 7);
    assert_eq!(config.get("nested"), Some(&json!({ "depth": 2 })));
    assert!(logs.contents().contains("DEBUG - Loaded configuration from"));
}

#[test]
fn test_empty_object_is_valid() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{}");

    let (config, logs) = with_captured_logs(false, || load_config(&path));

    assert!(config.is_empty());
    assert!(!logs.contents().contains("ERROR"));
}

#[test]
fn test_get_or_uses_value_when_present() {
    let config = config_from(json!({ "timeout": 45 }));
    assert_eq!(config.get_or("timeout", 30u64), 45);
}

#[test]
fn test_get_or_falls_back_when_absent() {
    let config = Config::default();
    assert_eq!(config.get_or("timeout", 30u64), 30);
    assert!(!config.get_or("enable_feature", false));
}

#[test]
fn test_get_or_falls_back_on_wrong_type() {
    let config = config_from(json!({ "timeout": "soon" }));

    let (timeout, logs) = with_captured_logs(false, || config.get_or("timeout", 30u64));

    assert_eq!(timeout, 30);
    assert!(logs.contents().contains("Ignoring configuration key 'timeout'"));
}

#[derive(Debug, Deserialize, PartialEq)]
struct Retry {
    attempts: u32,
    #[serde(default)]
    backoff_ms: u64,
}

#[test]
fn test_section_deserializes_nested_object() {
    let config = config_from(json!({ "retry": { "attempts": 3 } }));
    assert_eq!(
        config.section::<Retry>("retry"),
        Some(Retry {
            attempts: 3,
            backoff_ms: 0
        })
    );
}

#[test]
fn test_section_mismatch_is_none() {
    let config = config_from(json!({ "retry": { "attempts": "many" } }));
    assert_eq!(config.section::<Retry>("retry"), None);
    assert_eq!(config.section::<Retry>("absent"), None);
}

#[test]
fn test_keys_preserve_entries() {
    let config = config_from(json!({ "b": 1, "a": 2 }));
    let mut keys: Vec<&str> = config.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(config.len(), 2);
}
