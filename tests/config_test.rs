//! Tests for TOML configuration loading.

use std::io::Write;
use std::path::{Path, PathBuf};
use tictactoe_timeline::AppConfig;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.log_filter(), "info");
    assert!(*config.mouse());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config("newest_first = true\nlog_file = \"game.log\"\n");
    let config = AppConfig::from_file(file.path()).unwrap();
    assert!(*config.newest_first());
    assert_eq!(config.log_file(), Path::new("game.log"));
    assert_eq!(*config.poll_interval_ms(), 100);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let file = write_config("newest_first = maybe\n");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_zero_poll_interval_is_rejected() {
    let file = write_config("poll_interval_ms = 0\n");
    assert!(AppConfig::from_file(file.path()).is_err());
}

#[test]
fn test_log_file_override() {
    let config = AppConfig::default().with_log_file(PathBuf::from("other.log"));
    assert_eq!(config.log_file(), Path::new("other.log"));
}
