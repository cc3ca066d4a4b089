//! Configuration for the zero-shot tier

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default inference endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-mnli";

/// Default request timeout (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of characters sent upstream
pub const DEFAULT_MAX_INPUT_CHARS: usize = 500;

/// Zero-shot client configuration
///
/// The API token is never written back out when the configuration is
/// serialized; it is expected to come from the environment.
#[derive(Clone, Serialize, Deserialize)]
pub struct ZeroShotConfig {
    /// Inference endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token; the tier is unavailable without one
    #[serde(default, skip_serializing)]
    pub api_token: Option<String>,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Characters of normalized text sent upstream
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

impl ZeroShotConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Set the API token
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Whether a non-blank token is configured
    pub fn has_token(&self) -> bool {
        self.api_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.max_input_chars == 0 {
            return Err("max_input_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ZeroShotConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl fmt::Debug for ZeroShotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZeroShotConfig")
            .field("endpoint", &self.endpoint)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("max_input_chars", &self.max_input_chars)
            .finish()
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_input_chars() -> usize {
    DEFAULT_MAX_INPUT_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ZeroShotConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.has_token());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_blank_token_is_not_a_token() {
        let config = ZeroShotConfig::default().with_api_token("   ");
        assert!(!config.has_token());
    }

    #[test]
    fn test_token_is_redacted_and_not_serialized() {
        let config = ZeroShotConfig::default().with_api_token("hf_secret");
        assert!(!format!("{:?}", config).contains("hf_secret"));

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("hf_secret"));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: ZeroShotConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_input_chars, DEFAULT_MAX_INPUT_CHARS);
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = ZeroShotConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
