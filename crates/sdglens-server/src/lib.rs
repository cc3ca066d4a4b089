//! SDG Lens Server
//!
//! HTTP front end for the classification pipeline.
//!
//! # Endpoints
//!
//! - `POST /api/classify`: classify extracted document text
//! - `GET /health`, `GET /api/health`: report which tiers are usable
//!
//! # Startup
//!
//! 1. Load configuration (TOML file, then environment overrides)
//! 2. Download the model artifact if a URL is configured and the file is missing
//! 3. Load the artifact once
//! 4. Build the fallback pipeline and serve

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::{ConfigError, ServerConfig};
use handlers::{create_router, AppState, Orchestrator};
use sdglens_classifier::{ClassifierError, FallbackOrchestrator};
use sdglens_model::{ArtifactFetcher, FetchOutcome, LocalModelStrategy, ModelLoader};
use sdglens_zeroshot::RemoteZeroShotStrategy;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline construction error
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// A component could not be initialized
    #[error("Startup error: {0}")]
    Startup(String),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber
///
/// Honors `RUST_LOG`; defaults to `info`. Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Fetch and load the model, then assemble the pipeline
pub async fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    match ArtifactFetcher::from_config(&config.model) {
        Ok(Some(fetcher)) => match fetcher.fetch_if_missing().await {
            Ok(FetchOutcome::Downloaded { bytes }) => {
                info!("Model artifact downloaded ({} bytes)", bytes)
            }
            Ok(FetchOutcome::AlreadyPresent { .. }) => {}
            Err(e) => warn!("Model download failed, continuing without it: {}", e),
        },
        Ok(None) => {}
        Err(e) => warn!("Model download disabled: {}", e),
    }

    let loader = Arc::new(ModelLoader::new(&config.model));
    let local = tokio::task::spawn_blocking(move || LocalModelStrategy::from_loader(&loader))
        .await
        .map_err(|e| ServerError::Startup(format!("model loading task failed: {}", e)))?;

    let remote = RemoteZeroShotStrategy::new(&config.zero_shot)
        .map_err(|e| ServerError::Startup(e.to_string()))?;

    let orchestrator: Orchestrator =
        FallbackOrchestrator::try_new(remote, local, config.classifier.clone())?;

    info!(
        "Tiers: remote={}, local={}, rule_based=true",
        orchestrator.remote_available(),
        orchestrator.local_available()
    );

    Ok(AppState::new(orchestrator))
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;

    info!("Starting SDG Lens server");
    info!("Bind address: {}", config.bind_addr());

    let state = build_state(&config).await?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
