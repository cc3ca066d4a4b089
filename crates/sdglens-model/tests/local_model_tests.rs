//! Integration tests for artifact loading, download and the local strategy

use axum::{http::StatusCode, routing::get, Router};
use sdglens_domain::{normalize, ScoringStrategy, SdgId, SDGS, SDG_COUNT};
use sdglens_model::{
    Activation, ArtifactFetcher, ArtifactFile, FetchOutcome, LinearClassifier, LoadedArtifact,
    LocalModelStrategy, ModelConfig, ModelError, ModelLoader, Norm, Pipeline, TextClassifier,
    TfidfVectorizer,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Vocabulary of each goal's first keyword; identity weights scaled by 4
fn fixture_pipeline() -> Pipeline {
    let vocabulary = SDGS
        .iter()
        .enumerate()
        .map(|(i, sdg)| (sdg.keywords[0].to_string(), i))
        .collect();
    let coefficients = (0..SDG_COUNT)
        .map(|row| {
            (0..SDG_COUNT)
                .map(|col| if row == col { 4.0 } else { 0.0 })
                .collect()
        })
        .collect();

    Pipeline {
        vectorizer: TfidfVectorizer {
            vocabulary,
            idf: vec![1.0; SDG_COUNT],
            ngram_range: (1, 1),
            sublinear_tf: false,
            norm: Norm::L2,
        },
        classifier: LinearClassifier {
            coefficients,
            intercepts: vec![0.0; SDG_COUNT],
            activation: Activation::Softmax,
        },
    }
}

fn fixture_json() -> String {
    serde_json::to_string(&ArtifactFile::Pipeline {
        pipeline: fixture_pipeline(),
    })
    .unwrap()
}

fn write_fixture(path: &Path) {
    std::fs::write(path, fixture_json()).unwrap();
}

async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_loaded_model_ranks_matching_goal_first() {
    let dir = tempfile::tempdir().unwrap();
    let config = ModelConfig::with_directory(dir.path());
    write_fixture(&config.artifact_path());

    let loader = ModelLoader::new(&config);
    let strategy = LocalModelStrategy::from_loader(&loader);
    assert!(strategy.is_available());

    let text = normalize("Access to clean WATER in rural areas");
    let scores = strategy.score_all(&text).await;

    assert_eq!(scores.len(), SDG_COUNT);
    let (best, _) = scores
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .unwrap();
    assert_eq!(*best, SdgId::new(6).unwrap());
    let total: f64 = scores.values().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_text_without_vocabulary_is_uniform() {
    let artifact = LoadedArtifact::from_artifact(ArtifactFile::Pipeline {
        pipeline: fixture_pipeline(),
    })
    .unwrap();
    let strategy = LocalModelStrategy::new(Arc::new(artifact));

    let scores = strategy.score_all("lorem ipsum dolor").await;
    for p in scores.values() {
        assert!((p - 1.0 / SDG_COUNT as f64).abs() < 1e-9);
    }
}

struct Failing;

impl TextClassifier for Failing {
    fn predict_proba(&self, _text: &str) -> Result<Vec<f64>, ModelError> {
        Err(ModelError::Inference("boom".to_string()))
    }
}

#[tokio::test]
async fn test_inference_failure_is_absorbed() {
    let strategy = LocalModelStrategy::new(Arc::new(LoadedArtifact::Direct(Box::new(Failing))));
    assert!(strategy.is_available());
    assert!(strategy.score_all("water").await.is_empty());
}

#[tokio::test]
async fn test_missing_artifact_leaves_tier_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ModelLoader::with_candidates(vec![dir.path().join("sdg_model.json")]);
    let strategy = LocalModelStrategy::from_loader(&loader);
    assert!(!strategy.is_available());
}

#[tokio::test]
async fn test_fetch_downloads_and_verifies() {
    let body = fixture_json();
    let router = Router::new().route("/sdg_model.json", get(move || async move { body }));
    let base = spawn_stub(router).await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("nested").join("sdg_model.json");
    let fetcher = ArtifactFetcher::new(
        format!("{}/sdg_model.json", base),
        &dest,
        Duration::from_secs(5),
    )
    .unwrap();

    let outcome = fetcher.fetch_if_missing().await.unwrap();
    assert_eq!(
        outcome,
        FetchOutcome::Downloaded {
            bytes: fixture_json().len() as u64
        }
    );
    assert!(dest.is_file());
    assert!(!dir.path().join("nested").join("sdg_model.json.part").exists());

    // Second call is a no-op
    assert!(matches!(
        fetcher.fetch_if_missing().await.unwrap(),
        FetchOutcome::AlreadyPresent { .. }
    ));

    let loader = ModelLoader::with_candidates(vec![dest]);
    assert!(loader.load().is_some());
}

#[tokio::test]
async fn test_fetch_rejects_garbage_and_cleans_up() {
    let router = Router::new().route("/sdg_model.json", get(|| async { "<html>not a model</html>" }));
    let base = spawn_stub(router).await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("sdg_model.json");
    let fetcher = ArtifactFetcher::new(
        format!("{}/sdg_model.json", base),
        &dest,
        Duration::from_secs(5),
    )
    .unwrap();

    assert!(matches!(
        fetcher.fetch_if_missing().await,
        Err(ModelError::Parse(_))
    ));
    assert!(!dest.exists());
}

#[tokio::test]
async fn test_fetch_http_error() {
    let router = Router::new().route(
        "/sdg_model.json",
        get(|| async { (StatusCode::NOT_FOUND, "missing") }),
    );
    let base = spawn_stub(router).await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("sdg_model.json");
    let fetcher = ArtifactFetcher::new(
        format!("{}/sdg_model.json", base),
        &dest,
        Duration::from_secs(5),
    )
    .unwrap();

    assert!(matches!(
        fetcher.fetch_if_missing().await,
        Err(ModelError::Download(_))
    ));
    assert!(!dest.exists());
    assert!(!dir.path().join("sdg_model.json.part").exists());
}
