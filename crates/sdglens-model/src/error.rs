//! Error types for model loading and inference

use thiserror::Error;

/// Errors that can occur while loading, downloading or running a model
#[derive(Error, Debug)]
pub enum ModelError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact is not valid JSON or has an unknown format
    #[error("Artifact parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Artifact dimensions are inconsistent
    #[error("Invalid artifact shape: {0}")]
    Shape(String),

    /// Feature transform or inference failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Artifact download failed
    #[error("Download error: {0}")]
    Download(String),
}
