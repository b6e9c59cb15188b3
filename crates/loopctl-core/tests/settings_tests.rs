use std::fs;

use loopctl_core::{LoopSettings, SettingsError, DEFAULT_MAX_ITERATIONS, SETTINGS_FILE_NAME};
use loopctl_logging::LogFormat;
use tempfile::TempDir;

fn write_settings(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(SETTINGS_FILE_NAME), contents).unwrap();
    dir
}

#[test]
fn test_missing_file_is_none() {
    let dir = TempDir::new().unwrap();
    assert!(LoopSettings::load(dir.path()).unwrap().is_none());
}

#[test]
fn test_load_full_settings() {
    let dir = write_settings(
        r#"
max_iterations = 25

[logging]
level = "debug"
format = "json"
"#,
    );

    let settings = LoopSettings::load(dir.path()).unwrap().unwrap();

    assert_eq!(settings.max_iterations(), 25);
    assert_eq!(settings.log_level(), "debug");
    assert_eq!(settings.log_format().unwrap(), LogFormat::Json);
}

#[test]
fn test_empty_file_uses_defaults() {
    let dir = write_settings("");

    let settings = LoopSettings::load(dir.path()).unwrap().unwrap();

    assert_eq!(settings, LoopSettings::default());
    assert_eq!(settings.max_iterations(), DEFAULT_MAX_ITERATIONS);
    assert_eq!(settings.log_level(), "info");
    assert_eq!(settings.log_format().unwrap(), LogFormat::Pretty);
}

#[test]
fn test_zero_budget_is_kept() {
    let dir = write_settings("max_iterations = 0\n");
    let settings = LoopSettings::load(dir.path()).unwrap().unwrap();
    assert_eq!(settings.max_iterations(), 0);
}

#[test]
fn test_unknown_key_is_parse_error() {
    let dir = write_settings("max_iteration = 3\n");

    let err = LoopSettings::load(dir.path()).unwrap_err();

    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains(SETTINGS_FILE_NAME));
}

#[test]
fn test_invalid_log_format() {
    let dir = write_settings("[logging]\nformat = \"xml\"\n");

    let settings = LoopSettings::load(dir.path()).unwrap().unwrap();
    let err = settings.log_format().unwrap_err();

    assert!(matches!(err, SettingsError::InvalidLogFormat(_)));
    assert_eq!(
        err.to_string(),
        "Invalid logging format: Unknown log format: xml"
    );
}
