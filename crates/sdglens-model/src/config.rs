//! Configuration for the local model tier

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default artifact file name
pub const DEFAULT_FILE_NAME: &str = "sdg_model.json";

/// Default artifact download timeout (60 seconds)
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 60;

/// Where the artifact lives and where it can be fetched from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Directory holding the artifact
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Artifact file name inside `directory`
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Optional URL to download the artifact from when missing
    #[serde(default)]
    pub download_url: Option<String>,

    /// Download timeout (seconds)
    #[serde(default = "default_download_timeout_secs")]
    pub download_timeout_secs: u64,
}

impl ModelConfig {
    /// Configuration rooted at `directory`
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Primary artifact path (`directory/file_name`)
    pub fn artifact_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Get the download timeout as a Duration
    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.file_name.trim().is_empty() {
            return Err("file_name must not be empty".to_string());
        }
        if self.download_timeout_secs == 0 {
            return Err("download_timeout_secs must be greater than 0".to_string());
        }
        if let Some(url) = &self.download_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("download_url '{}' is not an http(s) URL", url));
            }
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            file_name: default_file_name(),
            download_url: None,
            download_timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("./models")
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_download_timeout_secs() -> u64 {
    DEFAULT_DOWNLOAD_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ModelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.artifact_path(), PathBuf::from("./models/sdg_model.json"));
        assert!(config.download_url.is_none());
    }

    #[test]
    fn test_invalid_download_url() {
        let mut config = ModelConfig::default();
        config.download_url = Some("ftp://example.com/model.json".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_directory() {
        let config = ModelConfig::with_directory("/srv/models");
        assert_eq!(config.artifact_path(), PathBuf::from("/srv/models/sdg_model.json"));
    }
}
