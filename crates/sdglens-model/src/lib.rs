//! SDG Lens Local Model Tier
//!
//! Loads a supervised SDG classifier from disk and exposes it as the second
//! tier of the fallback pipeline.
//!
//! # Overview
//!
//! - **Artifact formats**: a JSON document holding either a complete
//!   pipeline (text in, probabilities out) or a bundle of a TF-IDF vectorizer
//!   and a linear classifier. The shape is resolved once at load time into
//!   [`LoadedArtifact::Direct`] or [`LoadedArtifact::Paired`].
//! - **Single initialization**: [`ModelLoader`] locates and loads the
//!   artifact at most once, even under concurrent callers, and hands out a
//!   shared read-only `Arc`.
//! - **Download**: [`ArtifactFetcher`] pulls the artifact from a URL into the
//!   model directory when it is missing.
//! - **Strategy**: [`LocalModelStrategy`] implements `ScoringStrategy` and
//!   turns any inference failure into an empty score map.
//!
//! # Example Usage
//!
//! ```no_run
//! use sdglens_model::{LocalModelStrategy, ModelConfig, ModelLoader};
//! use sdglens_domain::ScoringStrategy;
//!
//! let loader = ModelLoader::new(&ModelConfig::default());
//! let strategy = LocalModelStrategy::from_loader(&loader);
//! println!("local tier available: {}", strategy.is_available());
//! ```

#![warn(missing_docs)]

mod artifact;
mod config;
mod error;
mod features;
mod fetch;
mod linear;
mod loader;
mod strategy;

pub use artifact::{
    ArtifactFile, FeatureClassifier, LoadedArtifact, Pipeline, TextClassifier, Vectorizer,
};
pub use config::ModelConfig;
pub use error::ModelError;
pub use features::{Norm, SparseVector, TfidfVectorizer};
pub use fetch::{ArtifactFetcher, FetchOutcome};
pub use linear::{Activation, LinearClassifier};
pub use loader::ModelLoader;
pub use strategy::LocalModelStrategy;
