use std::path::PathBuf;

use tempfile::TempDir;

use lexitype::config::{load_config_from, resolve_data_dir, save_config_to, DictConfig};

#[test]
fn test_default_config() {
    let config = DictConfig::default();
    assert_eq!(config.version, 1);
    assert!(config.data_dir.is_none());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let config = DictConfig {
        version: 1,
        data_dir: Some(PathBuf::from("/opt/wndb")),
    };
    save_config_to(&path, &config).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/more/config.json");

    save_config_to(&path, &DictConfig::default()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_invalid_json_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(load_config_from(&path).is_err());
}

#[test]
fn test_flag_takes_precedence() {
    let config = DictConfig {
        version: 1,
        data_dir: Some(PathBuf::from("/from/config")),
    };
    let dir = resolve_data_dir(Some(PathBuf::from("/from/flag")), &config).unwrap();
    assert_eq!(dir, PathBuf::from("/from/flag"));
}

#[test]
fn test_configured_dir_used_without_flag() {
    // The WNSEARCHDIR environment variable would take precedence over the
    // configured value, but tests do not set it.
    let config = DictConfig {
        version: 1,
        data_dir: Some(PathBuf::from("/from/config")),
    };
    if std::env::var_os("WNSEARCHDIR").is_none() {
        let dir = resolve_data_dir(None, &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/config"));
    }
}
