//! Local model as a scoring strategy

use crate::artifact::LoadedArtifact;
use crate::error::ModelError;
use crate::loader::ModelLoader;
use sdglens_domain::{ScoreMap, ScoringStrategy, SdgId, SourceTier, SDG_COUNT};
use std::sync::Arc;
use tracing::{debug, warn};

/// Second tier: a supervised model loaded from disk
#[derive(Debug, Clone)]
pub struct LocalModelStrategy {
    artifact: Option<Arc<LoadedArtifact>>,
}

impl LocalModelStrategy {
    /// Strategy over an already loaded artifact
    pub fn new(artifact: Arc<LoadedArtifact>) -> Self {
        Self {
            artifact: Some(artifact),
        }
    }

    /// Strategy over whatever `loader` produces (loading it if needed)
    pub fn from_loader(loader: &ModelLoader) -> Self {
        Self {
            artifact: loader.load(),
        }
    }

    /// Strategy that is never available
    pub fn unavailable() -> Self {
        Self { artifact: None }
    }

    /// Run inference and map class probabilities to goals
    pub fn predict(&self, normalized_text: &str) -> Result<ScoreMap, ModelError> {
        let artifact = self
            .artifact
            .as_ref()
            .ok_or_else(|| ModelError::Inference("no model loaded".to_string()))?;

        let probs = artifact.predict_proba(normalized_text)?;
        if probs.len() != SDG_COUNT {
            return Err(ModelError::Inference(format!(
                "model returned {} probabilities, expected {}",
                probs.len(),
                SDG_COUNT
            )));
        }
        if probs.iter().any(|p| !p.is_finite()) {
            return Err(ModelError::Inference("non-finite probability".to_string()));
        }

        Ok(probs
            .into_iter()
            .enumerate()
            .filter_map(|(index, p)| SdgId::from_index(index).map(|id| (id, p)))
            .collect())
    }
}

impl ScoringStrategy for LocalModelStrategy {
    fn tier(&self) -> SourceTier {
        SourceTier::Local
    }

    fn is_available(&self) -> bool {
        self.artifact.is_some()
    }

    async fn score_all(&self, normalized_text: &str) -> ScoreMap {
        match self.predict(normalized_text) {
            Ok(scores) => {
                debug!("Local model scored {} goals", scores.len());
                scores
            }
            Err(e) => {
                warn!("Local model inference failed: {}", e);
                ScoreMap::new()
            }
        }
    }
}
