//! Remote zero-shot strategy
//!
//! Posts text to a Hugging Face style zero-shot classification endpoint:
//!
//! ```text
//! POST <endpoint>
//! Authorization: Bearer <token>
//! {"inputs": "...", "parameters": {"candidate_labels": [...], "multi_label": true}}
//!
//! 200 {"sequence": "...", "labels": [...], "scores": [...]}
//! ```
//!
//! Labels come back sorted by score. Scores are independent per label in
//! multi-label mode and need not sum to one.

use crate::config::ZeroShotConfig;
use crate::labels::{candidate_labels, resolve_label};
use crate::ZeroShotError;
use sdglens_domain::{ScoreMap, ScoringStrategy, SourceTier};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Maximum characters of an error body kept in `ZeroShotError::Status`
const ERROR_BODY_LIMIT: usize = 200;

/// Request body for the zero-shot API
#[derive(Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [String],
    multi_label: bool,
}

/// Response from the zero-shot API
#[derive(Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
    scores: Vec<f64>,
}

/// First tier: remote zero-shot classification
pub struct RemoteZeroShotStrategy {
    endpoint: String,
    api_token: Option<String>,
    client: reqwest::Client,
    labels: Vec<String>,
    max_input_chars: usize,
    timeout: Duration,
}

impl RemoteZeroShotStrategy {
    /// Create a strategy from configuration
    ///
    /// # Errors
    ///
    /// Returns `ZeroShotError::Communication` if the HTTP client cannot be
    /// built (for example when no TLS backend is available).
    pub fn new(config: &ZeroShotConfig) -> Result<Self, ZeroShotError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.timeout())
            .build()
            .map_err(|e| ZeroShotError::Communication(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone().filter(|t| !t.trim().is_empty()),
            client,
            labels: candidate_labels(),
            max_input_chars: config.max_input_chars,
            timeout: config.timeout(),
        })
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Endpoint this strategy posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Classify normalized text, reporting failures as errors
    ///
    /// The whole exchange (connect, send, read body) is bounded by the
    /// configured timeout; on expiry the in-flight request is dropped.
    pub async fn classify(&self, normalized_text: &str) -> Result<ScoreMap, ZeroShotError> {
        let token = self.api_token.as_deref().ok_or(ZeroShotError::NotConfigured)?;
        let inputs = truncate_chars(normalized_text, self.max_input_chars);

        debug!(
            "Zero-shot request: {} chars, {} labels",
            inputs.len(),
            self.labels.len()
        );

        tokio::time::timeout(self.timeout, self.request(token, inputs))
            .await
            .map_err(|_| ZeroShotError::Timeout(self.timeout))?
    }

    async fn request(&self, token: &str, inputs: &str) -> Result<ScoreMap, ZeroShotError> {
        let body = ZeroShotRequest {
            inputs,
            parameters: ZeroShotParameters {
                candidate_labels: &self.labels,
                multi_label: true,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ZeroShotError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return Err(ZeroShotError::WarmingUp);
        }
        if status != reqwest::StatusCode::OK {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ZeroShotError::Status {
                status: status.as_u16(),
                body: truncate_chars(&text, ERROR_BODY_LIMIT).to_string(),
            });
        }

        let payload = response
            .json::<ZeroShotResponse>()
            .await
            .map_err(|e| ZeroShotError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        scores_from_response(payload)
    }
}

impl ScoringStrategy for RemoteZeroShotStrategy {
    fn tier(&self) -> SourceTier {
        SourceTier::Remote
    }

    fn is_available(&self) -> bool {
        self.api_token.is_some()
    }

    async fn score_all(&self, normalized_text: &str) -> ScoreMap {
        match self.classify(normalized_text).await {
            Ok(scores) => {
                info!("Zero-shot service scored {} goals", scores.len());
                scores
            }
            Err(ZeroShotError::WarmingUp) => {
                warn!("Zero-shot model is warming up, skipping remote tier");
                ScoreMap::new()
            }
            Err(e) => {
                warn!("Zero-shot classification failed: {}", e);
                ScoreMap::new()
            }
        }
    }
}

/// Map label/score pairs to goals by label text
fn scores_from_response(payload: ZeroShotResponse) -> Result<ScoreMap, ZeroShotError> {
    if payload.labels.len() != payload.scores.len() {
        return Err(ZeroShotError::InvalidResponse(format!(
            "{} labels but {} scores",
            payload.labels.len(),
            payload.scores.len()
        )));
    }

    let mut scores = ScoreMap::new();
    for (label, score) in payload.labels.iter().zip(payload.scores) {
        match resolve_label(label) {
            Some(id) if score.is_finite() => {
                scores.entry(id).or_insert(score);
            }
            Some(id) => debug!("Ignoring non-finite score for SDG {}", id),
            None => debug!("Ignoring unknown label '{}'", label),
        }
    }

    Ok(scores)
}

/// First `max_chars` characters of `text`
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
