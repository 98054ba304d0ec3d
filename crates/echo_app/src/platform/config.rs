use std::fs;
use std::path::Path;
use std::time::Duration;

use echo_engine::ValidatorSettings;
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "echo.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: ron::error::SpannedError,
    },
}

/// Optional settings read from `echo.ron`. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub latency_ms: u64,
    pub banned_substring: String,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let validator = ValidatorSettings::default();
        Self {
            latency_ms: validator.latency.as_millis() as u64,
            banned_substring: validator.banned_substring,
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn validator_settings(&self) -> ValidatorSettings {
        ValidatorSettings {
            latency: Duration::from_millis(self.latency_ms),
            banned_substring: self.banned_substring.clone(),
        }
    }
}

/// Reads the config file. A missing file is not an error and yields the defaults.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            });
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
