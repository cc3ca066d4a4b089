//! Single-initialization artifact loader

use crate::artifact::LoadedArtifact;
use crate::config::ModelConfig;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{info, warn};

/// Locates and loads the model artifact exactly once
///
/// Construct one loader at startup and share it (or the strategy built from
/// it) with request handlers. The first call to [`ModelLoader::load`] does
/// the work; concurrent callers block until it finishes and every caller
/// observes the same outcome. A failed load is remembered too: the local
/// tier stays unavailable instead of retrying on every request.
#[derive(Debug)]
pub struct ModelLoader {
    candidates: Vec<PathBuf>,
    slot: OnceLock<Option<Arc<LoadedArtifact>>>,
}

impl ModelLoader {
    /// Loader searching the configured path, then the conventional fallbacks
    ///
    /// Fallbacks, in order: `/tmp/models/<file>`, `./models/<file>`, `./<file>`.
    pub fn new(config: &ModelConfig) -> Self {
        let file_name = config.file_name.as_str();
        let mut candidates = vec![
            config.artifact_path(),
            Path::new("/tmp/models").join(file_name),
            Path::new("./models").join(file_name),
            PathBuf::from(file_name),
        ];
        candidates.dedup();
        Self::with_candidates(candidates)
    }

    /// Loader searching exactly `candidates`, in order
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            slot: OnceLock::new(),
        }
    }

    /// Loader that is already initialized with `artifact`
    pub fn preloaded(artifact: LoadedArtifact) -> Self {
        let loader = Self::with_candidates(Vec::new());
        // Fresh lock, cannot already be set
        let _ = loader.slot.set(Some(Arc::new(artifact)));
        loader
    }

    /// Paths searched, in order
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// First candidate that exists as a file
    pub fn locate(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.is_file())
    }

    /// Load the artifact on first call; later calls return the cached outcome
    pub fn load(&self) -> Option<Arc<LoadedArtifact>> {
        self.slot.get_or_init(|| self.load_uncached()).clone()
    }

    /// Whether a load has completed successfully
    pub fn is_loaded(&self) -> bool {
        matches!(self.slot.get(), Some(Some(_)))
    }

    fn load_uncached(&self) -> Option<Arc<LoadedArtifact>> {
        let Some(path) = self.locate() else {
            warn!(
                "Model artifact not found (searched: {})",
                self.candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            return None;
        };

        info!("Loading model artifact from {}", path.display());
        match LoadedArtifact::from_file(path) {
            Ok(artifact) => {
                info!("Model loaded ({} artifact)", artifact.kind());
                Some(Arc::new(artifact))
            }
            Err(e) => {
                warn!("Failed to load model from {}: {}", path.display(), e);
                None
            }
        }
    }
}
