//! Application configuration, read from an optional TOML file.
//!
//! Every field has a default, so an empty or missing file is a valid configuration:
//!
//! ```toml
//! storage_dir = "/home/me/.local/share/shopping-list"
//! channel_buffer = 32
//! error_clear_delay_ms = 100
//! toast_duration_ms = 4000
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const APP_DIR: &str = "shopping-list";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the persisted list.
    pub storage_dir: PathBuf,
    /// Capacity of the store's request channel. Also used for the notification channel.
    pub channel_buffer: usize,
    /// How long a reported error stays in the store before it is cleared.
    pub error_clear_delay_ms: u64,
    /// How long the presentation layer should show a notification.
    pub toast_duration_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: app_dir().join("storage"),
            channel_buffer: 32,
            error_clear_delay_ms: 100,
            toast_duration_ms: 4000,
        }
    }
}

/// `<config_dir>/shopping-list`, or `./shopping-list` where the platform has no config dir.
fn app_dir() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir.join(APP_DIR)
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/shopping-list/config.toml` on Linux, the platform equivalent elsewhere.
    pub fn config_path() -> PathBuf {
        app_dir().join("config.toml")
    }

    /// Loads the default config file, or the defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Validation {
                message: "channel_buffer must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn error_clear_delay(&self) -> Duration {
        Duration::from_millis(self.error_clear_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
