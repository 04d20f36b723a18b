//! JSON file helpers for the config file.

use crate::core::config::ConfigError;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Per-user config directory for shrinkfit (not created).
pub fn app_config_dir() -> Result<PathBuf, ConfigError> {
    let project_dirs = ProjectDirs::from("", "", "shrinkfit").ok_or(ConfigError::NoConfigDir)?;
    Ok(project_dirs.config_dir().to_path_buf())
}

/// Read and parse `path`. A missing file is `Ok(None)`.
pub fn load_json_if_exists<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
    let io_err = |source: io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_err)
}
