use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::config::PendulumConfig;
use crate::utils::PendulumError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid pendulum configuration: {0}")]
    Invalid(#[from] PendulumError),
}

impl PendulumConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file, picking the parser from the file extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let config = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&fs::read_to_string(path)?)?,
            "json" => Self::from_json_str(&fs::read_to_string(path)?)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        info!("Loaded pendulum config from {}", path.display());
        Ok(config)
    }
}
