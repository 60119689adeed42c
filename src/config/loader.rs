use std::path::{Path, PathBuf};

use crate::args::DEFAULT_CONFIG_FILES;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Loads the configuration file from the provided path or default locations.
///
/// Returns the path that was read along with its contents.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed, or when no
/// path was given and none of the default files exist.
pub fn load_config(path: Option<&str>) -> AppResult<(PathBuf, ConfigFile)> {
    if let Some(path) = path {
        let path = PathBuf::from(path);
        let config = load_config_file(&path)?;
        return Ok((path, config));
    }

    for candidate in DEFAULT_CONFIG_FILES {
        let path = PathBuf::from(candidate);
        if path.exists() {
            let config = load_config_file(&path)?;
            return Ok((path, config));
        }
    }

    Err(AppError::config(ConfigError::NoConfigFile {
        candidates: DEFAULT_CONFIG_FILES.join(", "),
    }))
}

/// Reads and parses one config file, picking the format from its extension.
///
/// # Errors
///
/// Returns an error when the file cannot be read, has an unsupported
/// extension, or does not parse.
pub fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("json") => serde_json::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("ini") => Err(AppError::config(ConfigError::IniConfig {
            path: path.to_path_buf(),
        })),
        Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        })),
        None => Err(AppError::config(ConfigError::MissingExtension)),
    }
}
