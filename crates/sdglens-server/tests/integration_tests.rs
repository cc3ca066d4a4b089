//! Integration tests for the HTTP front end

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sdglens_classifier::{ClassifierConfig, FallbackOrchestrator};
use sdglens_model::LocalModelStrategy;
use sdglens_server::handlers::{
    create_router, AppState, ClassifyResponse, ErrorResponse, HealthCheckResponse,
};
use sdglens_zeroshot::{RemoteZeroShotStrategy, ZeroShotConfig};
use serde_json::json;
use tower::ServiceExt; // for oneshot

/// Rule-based tier only: no token, no model
fn create_test_app() -> Router {
    let remote = RemoteZeroShotStrategy::new(&ZeroShotConfig::default()).unwrap();
    let orchestrator = FallbackOrchestrator::new(
        remote,
        LocalModelStrategy::unavailable(),
        ClassifierConfig::default(),
    );
    create_router(AppState::new(orchestrator))
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> axum::body::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    for uri in ["/health", "/api/health"] {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let health: HealthCheckResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(health.status, "healthy");
        assert!(!health.model_loaded);
        assert!(!health.remote_enabled);
    }
}

#[tokio::test]
async fn test_classify_document() {
    let request = post_json(
        "/api/classify",
        json!({
            "title": "Clean water for rural communities",
            "abstract": "We study sanitation and hygiene interventions.",
            "keywords": ["wastewater"],
            "full_text": ""
        }),
    );

    let response = create_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ClassifyResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(body.success);
    assert!(uuid_like(&body.extraction_id));
    assert_eq!(body.document.title, "Clean water for rural communities");
    assert_eq!(body.document.keywords, vec!["wastewater"]);

    let top = &body.sdg_analysis[0];
    assert_eq!(top.sdg_number, 6);
    assert_eq!(top.sdg_name, "Clean Water and Sanitation");
    assert_eq!(top.source, "rule_based");
    assert_eq!(
        top.matched_keywords,
        vec!["water", "sanitation", "hygiene", "clean", "wastewater"]
    );
    assert!((top.confidence - 0.75).abs() < 1e-9);
    assert!(top.explanation.starts_with("Strong alignment with SDG 6"));
    assert!(body.sdg_analysis.len() <= 3);
}

#[tokio::test]
async fn test_top_k_is_clamped() {
    let request = post_json(
        "/api/classify",
        json!({
            "full_text": "poverty hunger health education gender water energy",
            "top_k": 0
        }),
    );

    let response = create_test_app().oneshot(request).await.unwrap();
    let body: ClassifyResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.sdg_analysis.len(), 1);
}

#[tokio::test]
async fn test_no_match_sentinel() {
    let request = post_json("/api/classify", json!({"full_text": "Lorem ipsum dolor sit amet"}));

    let response = create_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ClassifyResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.sdg_analysis.len(), 1);
    let sentinel = &body.sdg_analysis[0];
    assert_eq!(sentinel.sdg_number, 0);
    assert_eq!(sentinel.sdg_name, "No Clear Match");
    assert_eq!(sentinel.confidence, 0.0);
    assert_eq!(sentinel.source, "none");
    assert_eq!(sentinel.explanation, "No SDGs detected with sufficient confidence");
}

#[tokio::test]
async fn test_long_abstract_is_truncated() {
    let request = post_json(
        "/api/classify",
        json!({"title": "Energy", "abstract": "solar ".repeat(60)}),
    );

    let response = create_test_app().oneshot(request).await.unwrap();
    let body: ClassifyResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.document.abstract_text.chars().count(), 203);
    assert!(body.document.abstract_text.ends_with("..."));
}

#[tokio::test]
async fn test_empty_document_is_bad_request() {
    let request = post_json("/api/classify", json!({"title": "  ", "keywords": []}));

    let response = create_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(!body.success);
    assert!(!body.error.is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/classify")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = create_test_app().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

fn uuid_like(id: &str) -> bool {
    id.len() == 36 && id.chars().filter(|c| *c == '-').count() == 4
}
