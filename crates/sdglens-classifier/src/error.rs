//! Error types for the classifier

use thiserror::Error;

/// Errors surfaced by the pipeline's front-door operations
///
/// Tier failures never show up here; they are absorbed inside each
/// strategy and end in a fall-through.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document has no text in any field
    #[error("Document contains no text")]
    EmptyDocument,
}
