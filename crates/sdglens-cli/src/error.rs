//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model loading or download error
    #[error("Model error: {0}")]
    Model(#[from] sdglens_model::ModelError),

    /// Zero-shot client setup error
    #[error("Zero-shot error: {0}")]
    ZeroShot(#[from] sdglens_zeroshot::ZeroShotError),

    /// Pipeline error
    #[error("Classifier error: {0}")]
    Classifier(#[from] sdglens_classifier::ClassifierError),
}
