//! Model artifacts and their resolved in-memory form

use crate::error::ModelError;
use crate::features::{SparseVector, TfidfVectorizer};
use crate::linear::LinearClassifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A classifier that maps text directly to per-class probabilities
pub trait TextClassifier: Send + Sync {
    /// One probability per goal, indexed by `id - 1`
    fn predict_proba(&self, text: &str) -> Result<Vec<f64>, ModelError>;
}

/// Turns text into a feature vector
pub trait Vectorizer: Send + Sync {
    /// Vectorize normalized text
    fn transform(&self, text: &str) -> Result<SparseVector, ModelError>;
}

/// A classifier over precomputed features
pub trait FeatureClassifier: Send + Sync {
    /// One probability per goal, indexed by `id - 1`
    fn predict_proba(&self, features: &SparseVector) -> Result<Vec<f64>, ModelError>;
}

impl Vectorizer for TfidfVectorizer {
    fn transform(&self, text: &str) -> Result<SparseVector, ModelError> {
        TfidfVectorizer::transform(self, text)
    }
}

impl FeatureClassifier for LinearClassifier {
    fn predict_proba(&self, features: &SparseVector) -> Result<Vec<f64>, ModelError> {
        LinearClassifier::predict_proba(self, features)
    }
}

/// Vectorizer and classifier fused into a single text classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    /// Feature extraction step
    pub vectorizer: TfidfVectorizer,

    /// Classification step
    pub classifier: LinearClassifier,
}

impl Pipeline {
    /// Check that both steps fit together
    pub fn validate(&self) -> Result<(), ModelError> {
        self.vectorizer.validate()?;
        self.classifier.validate(self.vectorizer.n_features())
    }
}

impl TextClassifier for Pipeline {
    fn predict_proba(&self, text: &str) -> Result<Vec<f64>, ModelError> {
        let features = self.vectorizer.transform(text)?;
        self.classifier.predict_proba(&features)
    }
}

/// On-disk artifact, tagged by `format`
///
/// ```json
/// {"format": "pipeline", "pipeline": {"vectorizer": {...}, "classifier": {...}}}
/// {"format": "bundle", "vectorizer": {...}, "model": {...}}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum ArtifactFile {
    /// Complete text-to-probability pipeline
    Pipeline {
        /// The pipeline
        pipeline: Pipeline,
    },

    /// Separately stored vectorizer and classifier
    Bundle {
        /// Feature extraction step
        vectorizer: TfidfVectorizer,
        /// Classification step
        model: LinearClassifier,
    },
}

/// Artifact resolved once at load time
///
/// The shape of the artifact is decided here and never re-inspected per
/// request.
pub enum LoadedArtifact {
    /// Object exposing text-to-probability inference directly
    Direct(Box<dyn TextClassifier>),

    /// Vectorizer applied before a feature classifier
    Paired {
        /// Feature extraction step
        vectorizer: Box<dyn Vectorizer>,
        /// Classification step
        classifier: Box<dyn FeatureClassifier>,
    },
}

impl LoadedArtifact {
    /// Read, parse and validate an artifact file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path.as_ref())?;
        let file: ArtifactFile = serde_json::from_slice(&bytes)?;
        Self::from_artifact(file)
    }

    /// Validate a parsed artifact and resolve its shape
    pub fn from_artifact(file: ArtifactFile) -> Result<Self, ModelError> {
        match file {
            ArtifactFile::Pipeline { pipeline } => {
                pipeline.validate()?;
                Ok(LoadedArtifact::Direct(Box::new(pipeline)))
            }
            ArtifactFile::Bundle { vectorizer, model } => {
                vectorizer.validate()?;
                model.validate(vectorizer.n_features())?;
                Ok(LoadedArtifact::Paired {
                    vectorizer: Box::new(vectorizer),
                    classifier: Box::new(model),
                })
            }
        }
    }

    /// Per-goal probabilities for normalized text
    pub fn predict_proba(&self, text: &str) -> Result<Vec<f64>, ModelError> {
        match self {
            LoadedArtifact::Direct(classifier) => classifier.predict_proba(text),
            LoadedArtifact::Paired {
                vectorizer,
                classifier,
            } => {
                let features = vectorizer.transform(text)?;
                classifier.predict_proba(&features)
            }
        }
    }

    /// Shape name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            LoadedArtifact::Direct(_) => "direct",
            LoadedArtifact::Paired { .. } => "paired",
        }
    }
}

impl fmt::Debug for LoadedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LoadedArtifact").field(&self.kind()).finish()
    }
}
