//! Settings persistence tests
//!
//! Uses temporary directories so nothing touches the real config directory.

use pointer_accuracy::core::{load_or_default, load_settings, save_settings};
use pointer_accuracy::{ClassifierSettings, CoreError};
use std::fs;

#[test]
fn test_save_then_load_through_nested_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = ClassifierSettings {
        resolution_tiers: true,
        debounce_ms: 100,
        ..ClassifierSettings::default()
    };

    save_settings(&settings, &path).unwrap();
    let loaded = load_settings(&path).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    assert!(matches!(load_settings(&path), Err(CoreError::SettingsIo(_))));
    assert_eq!(load_or_default(&path), ClassifierSettings::default());
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        load_settings(&path),
        Err(CoreError::SettingsSerialization(_))
    ));
    assert_eq!(load_or_default(&path), ClassifierSettings::default());
}

#[test]
fn test_invalid_values_are_rejected_on_load_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"small_max_width": 2000, "medium_max_width": 1000}"#).unwrap();

    assert!(matches!(
        load_settings(&path),
        Err(CoreError::InvalidSettings { .. })
    ));

    let bad = ClassifierSettings {
        dpr_threshold: 0.0,
        ..ClassifierSettings::default()
    };
    let out = dir.path().join("out.json");
    assert!(save_settings(&bad, &out).is_err());
    assert!(!out.exists());
}
