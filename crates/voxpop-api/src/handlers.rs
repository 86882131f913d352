//! HTTP request handlers for the API service.
//!
//! Implements interview creation (typed transcript and file upload),
//! retrieval, and health check endpoints using axum.

use crate::config::ApiConfig;
use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use voxpop_analyzer::{Analyzer, AnalyzerError, SourceDocument};
use voxpop_domain::traits::{InterviewStore, LlmProvider};
use voxpop_domain::{Interview, NewInterview};
use voxpop_store::{SqliteStore, StoreError};

/// Fallback title when neither the request nor any filename provides one
const DEFAULT_UPLOAD_TITLE: &str = "Uploaded Interview";

/// Shared application state
pub struct AppState<L>
where
    L: LlmProvider,
{
    /// Interview store behind a lock; rusqlite connections are not Sync
    pub store: Arc<Mutex<SqliteStore>>,
    /// Analyzer shared across requests
    pub analyzer: Arc<Analyzer<L>>,
}

impl<L> Clone for AppState<L>
where
    L: LlmProvider,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}

/// Typed interview creation request
#[derive(Debug, Deserialize)]
pub struct CreateInterviewRequest {
    /// Title for the stored record
    pub title: String,

    /// Interview transcript text
    pub transcript: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Service status, "ok" when serving
    pub status: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum ApiError {
    /// Request was malformed or carried nothing to analyze
    BadRequest(String),
    /// Requested record does not exist
    NotFound(String),
    /// Storage failure
    Store(StoreError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Store(e)
    }
}

impl From<AnalyzerError> for ApiError {
    fn from(e: AnalyzerError) -> Self {
        match e {
            AnalyzerError::NoExtractableContent => {
                ApiError::BadRequest("Unable to extract text from uploaded files".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

fn lock_store<L>(state: &AppState<L>) -> Result<MutexGuard<'_, SqliteStore>, ApiError>
where
    L: LlmProvider,
{
    state
        .store
        .lock()
        .map_err(|_| ApiError::Internal("Interview store lock poisoned".to_string()))
}

/// Insert a record while holding the store lock; never called across an await
fn store_interview<L>(state: &AppState<L>, new: NewInterview) -> Result<Interview, ApiError>
where
    L: LlmProvider,
{
    let mut store = lock_store(state)?;
    Ok(store.create_interview(new)?)
}

/// POST /api/v1/interviews - Create an interview from a typed transcript
///
/// The transcript is analyzed as one document. If the completion fails, the
/// interview is still stored, with a null analysis.
async fn create_interview<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<CreateInterviewRequest>,
) -> Result<Json<Interview>, ApiError>
where
    L: LlmProvider + 'static,
    L::Error: std::fmt::Display,
{
    let analysis = state
        .analyzer
        .analyze_transcript(&request.transcript, None)
        .await;

    let interview = store_interview(
        &state,
        NewInterview::new(request.title, request.transcript, analysis),
    )?;

    info!(id = interview.id, "Stored typed interview");
    Ok(Json(interview))
}

/// POST /api/v1/interviews/upload - Create an interview from uploaded files
///
/// Multipart fields: `files` (repeated), optional `title`, optional
/// `product_description`. Title falls back to the first filename, then to a
/// fixed default.
async fn upload_interview<L>(
    State(state): State<AppState<L>>,
    mut multipart: Multipart,
) -> Result<Json<Interview>, ApiError>
where
    L: LlmProvider + 'static,
    L::Error: std::fmt::Display,
{
    let mut documents: Vec<SourceDocument> = Vec::new();
    let mut title: Option<String> = None;
    let mut product_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart request: {}", e)))?
    {
        match field.name() {
            Some("files") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;
                documents.push(SourceDocument::new(filename, content.to_vec()));
            }
            Some("title") => {
                title = field.text().await.ok().filter(|t| !t.trim().is_empty());
            }
            Some("product_description") => {
                product_description = field.text().await.ok().filter(|d| !d.trim().is_empty());
            }
            _ => {}
        }
    }

    if documents.is_empty() {
        return Err(ApiError::BadRequest("No files uploaded".to_string()));
    }

    let title = title
        .or_else(|| {
            documents
                .first()
                .map(|d| d.filename.clone())
                .filter(|name| !name.is_empty())
        })
        .unwrap_or_else(|| DEFAULT_UPLOAD_TITLE.to_string());

    let result = state
        .analyzer
        .analyze_documents(&documents, product_description.as_deref())
        .await?;

    let interview = store_interview(
        &state,
        NewInterview::new(title, result.transcript, Some(result.report)),
    )?;

    info!(id = interview.id, files = documents.len(), "Stored uploaded interview");
    Ok(Json(interview))
}

/// GET /api/v1/interviews - List stored interviews, newest first
async fn list_interviews<L>(
    State(state): State<AppState<L>>,
) -> Result<Json<Vec<Interview>>, ApiError>
where
    L: LlmProvider + 'static,
    L::Error: std::fmt::Display,
{
    let store = lock_store(&state)?;
    let interviews = store.list_interviews()?;
    Ok(Json(interviews))
}

/// GET /api/v1/interviews/{id} - Fetch one interview
async fn get_interview<L>(
    State(state): State<AppState<L>>,
    Path(id): Path<i64>,
) -> Result<Json<Interview>, ApiError>
where
    L: LlmProvider + 'static,
    L::Error: std::fmt::Display,
{
    let store = lock_store(&state)?;
    let interview = store
        .get_interview(id)?
        .ok_or_else(|| ApiError::NotFound("Interview not found".to_string()))?;

    Ok(Json(interview))
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// Create the axum router with all routes, body limit, and CORS layer
pub fn create_router<L>(state: AppState<L>, config: &ApiConfig) -> Router
where
    L: LlmProvider + 'static,
    L::Error: std::fmt::Display,
{
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/v1/interviews",
            post(create_interview::<L>).get(list_interviews::<L>),
        )
        .route("/api/v1/interviews/upload", post(upload_interview::<L>))
        .route("/api/v1/interviews/:id", get(get_interview::<L>))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot
    use voxpop_analyzer::AnalyzerConfig;
    use voxpop_llm::MockProvider;

    fn create_test_state(llm: MockProvider) -> AppState<MockProvider> {
        let store = SqliteStore::new(":memory:").unwrap();

        AppState {
            store: Arc::new(Mutex::new(store)),
            analyzer: Arc::new(Analyzer::new(llm, AnalyzerConfig::default())),
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = create_test_state(MockProvider::default());
        let app = create_router(state, &ApiConfig::default_test_config());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_missing_interview_returns_404() {
        let state = create_test_state(MockProvider::default());
        let app = create_router(state, &ApiConfig::default_test_config());

        let request = Request::builder()
            .uri("/api/v1/interviews/42")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
