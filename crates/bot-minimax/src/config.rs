//! Configuration file loading for the self-play driver.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Bot settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Search depth in plies. Defaults to 2.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Self-play stops after this many plies. Defaults to 200.
    #[serde(default = "default_max_plies")]
    pub max_plies: usize,
}

fn default_depth() -> u32 {
    chess_engine::DEFAULT_DEPTH
}

fn default_max_plies() -> usize {
    200
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            depth: default_depth(),
            max_plies: default_max_plies(),
        }
    }
}

impl BotConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`Self::config_path()`] is
    /// read when present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content =
            std::fs::read_to_string(&config_path).map_err(|source| ConfigError::ReadError {
                path: config_path.clone(),
                source,
            })?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the path of the default configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("bot-minimax.toml")
    }
}
