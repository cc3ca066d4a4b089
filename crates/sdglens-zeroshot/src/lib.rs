//! SDG Lens Zero-Shot Tier
//!
//! Remote zero-shot classification against a hosted NLI model (by default
//! `facebook/bart-large-mnli` on the Hugging Face inference API).
//!
//! # Architecture
//!
//! This crate provides [`RemoteZeroShotStrategy`], the first tier of the
//! fallback pipeline. It implements the `ScoringStrategy` trait from
//! `sdglens-domain`: the text is sent together with the 17 fixed candidate
//! labels in multi-label mode, and the returned label/score pairs are mapped
//! back to goals by label text.
//!
//! Every failure (missing token, timeout, HTTP 503 while the model warms up,
//! other status codes, malformed payloads) stays inside the strategy and
//! surfaces to the pipeline as an empty score map.
//!
//! # Examples
//!
//! ```no_run
//! use sdglens_zeroshot::{RemoteZeroShotStrategy, ZeroShotConfig};
//! use sdglens_domain::ScoringStrategy;
//!
//! # fn example() -> Result<(), sdglens_zeroshot::ZeroShotError> {
//! let config = ZeroShotConfig::default().with_api_token("hf_xxx");
//! let strategy = RemoteZeroShotStrategy::new(&config)?;
//! assert!(strategy.is_available());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod labels;

use thiserror::Error;

pub use client::RemoteZeroShotStrategy;
pub use config::ZeroShotConfig;
pub use labels::{candidate_labels, resolve_label};

/// Errors that can occur while calling the zero-shot service
#[derive(Error, Debug)]
pub enum ZeroShotError {
    /// No API token configured
    #[error("No API token configured")]
    NotConfigured,

    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Request did not complete within the configured bound
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// HTTP 503: the hosted model is still loading
    #[error("Model is warming up (HTTP 503)")]
    WarmingUp,

    /// Any other non-200 response
    #[error("HTTP {status}: {body}")]
    Status {
        /// Status code
        status: u16,
        /// Truncated response body
        body: String,
    },

    /// Response body does not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
