//! Unit tests for the settings module.

use gdpboard::settings::{Settings, default_settings_path};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        data_path: Some(PathBuf::from("/data/gdp_pcap.csv")),
        delimiter: Some(';'),
        default_country_count: 3,
        seed: Some(99),
        year_mark_step: 10,
    };
    settings.save_to(&path).unwrap();

    assert_eq!(Settings::load_from(&path).unwrap(), settings);
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("parsing"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(Settings::load_from(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_default_path() {
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("gdpboard/settings.json"));
    }
}
