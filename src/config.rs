use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{DictError, Result};

/// Name of the configuration file stored inside the config directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Application directory name under the platform config/data dirs.
pub const APP_DIR: &str = "lexitype";

/// Environment variable naming the WNDB directory, following the WordNet
/// tools' convention.
pub const DATA_DIR_ENV: &str = "WNSEARCHDIR";

/// Persistent configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Directory holding the WordNet database files, if configured.
    pub data_dir: Option<PathBuf>,
}

impl Default for DictConfig {
    fn default() -> Self {
        Self {
            version: 1,
            data_dir: None,
        }
    }
}

/// Returns the path to the configuration file, if a platform config
/// directory exists.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Loads the configuration from the default location.
///
/// A missing file (or missing platform config dir) yields the default
/// configuration; an unreadable or invalid file is an error.
pub fn load_config() -> Result<DictConfig> {
    match config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(DictConfig::default()),
    }
}

/// Loads the configuration from a specific file.
pub fn load_config_from(path: &Path) -> Result<DictConfig> {
    let contents = fs::read_to_string(path).map_err(|e| DictError::Config {
        message: format!("failed to read config file '{}': {}", path.display(), e),
    })?;

    let config: DictConfig = serde_json::from_str(&contents).map_err(|e| DictError::Config {
        message: format!("failed to parse config file '{}': {}", path.display(), e),
    })?;

    Ok(config)
}

/// Saves the configuration using an atomic write.
///
/// Writes to a temporary file first and then renames it into place, so a
/// partial write never corrupts the configuration.
pub fn save_config_to(path: &Path, config: &DictConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DictError::Config {
            message: format!(
                "failed to create config directory '{}': {}",
                parent.display(),
                e
            ),
        })?;
    }

    let tmp_path = path.with_extension("tmp");

    let json = serde_json::to_string_pretty(config).map_err(|e| DictError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &json).map_err(|e| DictError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, path).map_err(|e| DictError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            path.display(),
            e
        ),
    })?;

    Ok(())
}

/// Resolves the WNDB directory to load.
///
/// Precedence: explicit flag, then the `WNSEARCHDIR` environment variable,
/// then the configured value, then the platform data dir default.
pub fn resolve_data_dir(flag: Option<PathBuf>, config: &DictConfig) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }
    dirs::data_dir()
        .map(|d| d.join(APP_DIR).join("wndb"))
        .ok_or_else(|| DictError::Config {
            message: "no data directory configured and no platform default available".to_string(),
        })
}
