//! Configuration file parsing for the server.
//!
//! Settings come from an optional TOML file and are then overridden by
//! environment variables, so a container can be configured without a file.

use sdglens_classifier::ClassifierConfig;
use sdglens_model::ModelConfig;
use sdglens_zeroshot::ZeroShotConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A setting has an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
///
/// ```toml
/// bind_address = "0.0.0.0"
/// bind_port = 5000
///
/// [classifier]
/// top_k = 3
///
/// [zero_shot]
/// timeout_secs = 30
///
/// [model]
/// directory = "./models"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub bind_address: String,

    /// Bind port
    pub bind_port: u16,

    /// Pipeline settings
    pub classifier: ClassifierConfig,

    /// Remote tier settings
    pub zero_shot: ZeroShotConfig,

    /// Local tier settings
    pub model: ModelConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            bind_port: 5000,
            classifier: ClassifierConfig::default(),
            zero_shot: ZeroShotConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Apply overrides from the process environment
    ///
    /// Recognized: `HF_API_TOKEN`, `HF_API_URL`, `MODEL_PATH`, `MODEL_URL`, `PORT`.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = lookup("HF_API_TOKEN") {
            self.zero_shot.api_token = Some(token);
        }
        if let Some(url) = lookup("HF_API_URL") {
            self.zero_shot.endpoint = url;
        }
        if let Some(path) = lookup("MODEL_PATH") {
            self.model.directory = PathBuf::from(path);
        }
        if let Some(url) = lookup("MODEL_URL") {
            self.model.download_url = Some(url);
        }
        if let Some(port) = lookup("PORT") {
            self.bind_port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("PORT '{}' is not a valid port", port)))?;
        }
        Ok(())
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Invalid("bind_address must not be empty".to_string()));
        }
        self.classifier
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("classifier: {}", e)))?;
        self.zero_shot
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("zero_shot: {}", e)))?;
        self.model
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("model: {}", e)))?;
        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
