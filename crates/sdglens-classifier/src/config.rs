//! Configuration for the classification pipeline

use sdglens_domain::{MIN_CONFIDENCE, SDG_COUNT};
use serde::{Deserialize, Serialize};

/// Post-processing and keyword scoring settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Maximum number of goals reported
    pub top_k: usize,

    /// Confidence floor; never lower than 0.05
    pub min_confidence: f64,

    /// Score contributed by each matched keyword in the rule tier
    pub keyword_weight: f64,

    /// Upper bound on a rule-tier score
    pub keyword_score_cap: f64,
}

impl ClassifierConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.top_k == 0 || self.top_k > SDG_COUNT {
            return Err(format!("top_k must be between 1 and {}", SDG_COUNT));
        }
        if !(MIN_CONFIDENCE..=1.0).contains(&self.min_confidence) {
            return Err(format!(
                "min_confidence must be between {} and 1.0",
                MIN_CONFIDENCE
            ));
        }
        if !(self.keyword_weight > 0.0 && self.keyword_weight <= 1.0) {
            return Err("keyword_weight must be in (0.0, 1.0]".to_string());
        }
        if !(0.0..=1.0).contains(&self.keyword_score_cap) {
            return Err("keyword_score_cap must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }

    /// `top_k` clamped into `1..=17`
    pub fn clamp_top_k(top_k: usize) -> usize {
        top_k.clamp(1, SDG_COUNT)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            min_confidence: MIN_CONFIDENCE,
            keyword_weight: 0.15,
            keyword_score_cap: 0.85,
        }
    }
}
