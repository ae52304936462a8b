use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::model::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Default location of config.toml, e.g.
/// `~/.config/ticklist/config.toml` on Linux. None if no home directory
/// can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "ticklist", "ticklist")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration. An explicit path must exist and parse; the default
/// path is optional — a missing file just yields the default config.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => match default_config_path() {
            Some(p) => (p, false),
            None => return Ok(Config::default()),
        },
    };

    if !required && !path.exists() {
        return Ok(Config::default());
    }

    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError { path, source: e })
}
