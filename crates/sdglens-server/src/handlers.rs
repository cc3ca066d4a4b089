//! HTTP request handlers for the classification service.
//!
//! Implements the classify and health check endpoints using axum.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use sdglens_classifier::{ClassifierError, FallbackOrchestrator};
use sdglens_domain::{DocumentText, PredictionResult, ScoredCandidate};
use sdglens_model::LocalModelStrategy;
use sdglens_zeroshot::RemoteZeroShotStrategy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Characters of the abstract echoed back in responses
const ABSTRACT_PREVIEW_CHARS: usize = 200;

/// The production pipeline: remote zero-shot, then local model, then keywords
pub type Orchestrator = FallbackOrchestrator<RemoteZeroShotStrategy, LocalModelStrategy>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Classification pipeline
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    /// Wrap an orchestrator
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}

/// Classification request: extracted document fields
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Document title
    #[serde(default)]
    pub title: String,

    /// Abstract
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,

    /// Author keywords
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Body text
    #[serde(default)]
    pub full_text: String,

    /// Number of goals to report (clamped into 1..=17)
    #[serde(default)]
    pub top_k: Option<usize>,
}

impl ClassifyRequest {
    fn into_document(self) -> (DocumentText, Option<usize>) {
        let document = DocumentText {
            title: self.title,
            abstract_text: self.abstract_text,
            keywords: self.keywords,
            full_text: self.full_text,
        };
        (document, self.top_k)
    }
}

/// Document summary echoed in the response
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Title
    pub title: String,
    /// Abstract preview
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Keywords
    pub keywords: Vec<String>,
}

/// One ranked goal in the response
#[derive(Debug, Serialize, Deserialize)]
pub struct SdgAnalysis {
    /// Goal number (0 for no match)
    pub sdg_number: u8,
    /// Goal name
    pub sdg_name: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// Keywords found in the text
    pub matched_keywords: Vec<String>,
    /// Explanation
    pub explanation: String,
    /// Tier that produced the score
    pub source: String,
}

impl From<&ScoredCandidate> for SdgAnalysis {
    fn from(candidate: &ScoredCandidate) -> Self {
        Self {
            sdg_number: candidate.sdg_id.number(),
            sdg_name: candidate.sdg_name().to_string(),
            confidence: candidate.confidence,
            matched_keywords: candidate.matched_keywords.clone(),
            explanation: candidate.explanation.clone(),
            source: candidate.source_tier.as_str().to_string(),
        }
    }
}

/// Classification response
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Always true
    pub success: bool,
    /// Identifier of this classification
    pub extraction_id: String,
    /// Document summary
    pub document: DocumentSummary,
    /// Ranked goals
    pub sdg_analysis: Vec<SdgAnalysis>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Whether the local model is loaded
    pub model_loaded: bool,
    /// Whether the remote tier is configured
    pub remote_enabled: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request cannot be classified
    BadRequest(String),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });
        (status, body).into_response()
    }
}

impl From<ClassifierError> for AppError {
    fn from(e: ClassifierError) -> Self {
        match e {
            ClassifierError::EmptyDocument => AppError::BadRequest(e.to_string()),
            ClassifierError::Config(_) => AppError::InternalError(e.to_string()),
        }
    }
}

fn abstract_preview(text: &str) -> String {
    if text.chars().count() > ABSTRACT_PREVIEW_CHARS {
        let preview: String = text.chars().take(ABSTRACT_PREVIEW_CHARS).collect();
        format!("{}...", preview)
    } else {
        text.to_string()
    }
}

fn build_response(document: DocumentText, result: &PredictionResult) -> ClassifyResponse {
    ClassifyResponse {
        success: true,
        extraction_id: Uuid::now_v7().to_string(),
        document: DocumentSummary {
            abstract_text: abstract_preview(&document.abstract_text),
            title: document.title,
            keywords: document.keywords,
        },
        sdg_analysis: result.iter().map(SdgAnalysis::from).collect(),
    }
}

/// POST /api/classify - Classify a document against the 17 goals
async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let (document, top_k) = request.into_document();

    let result = state
        .orchestrator
        .classify_document(&document, top_k)
        .await?;

    info!(
        "Classified document ({} goals, tier {})",
        result.len(),
        result.source_tier()
    );

    Ok(Json(build_response(document, &result)))
}

/// GET /health - Service health
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        model_loaded: state.orchestrator.local_available(),
        remote_enabled: state.orchestrator.remote_available(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/classify", post(classify))
        .route("/health", get(health_check))
        .route("/api/health", get(health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstract_preview() {
        assert_eq!(abstract_preview("short"), "short");

        let long = "a".repeat(250);
        let preview = abstract_preview(&long);
        assert_eq!(preview.len(), 203);
        assert!(preview.ends_with("..."));

        assert_eq!(abstract_preview(&"é".repeat(200)).chars().count(), 200);
    }
}
