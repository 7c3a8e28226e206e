//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa::{OpenApi, ToSchema};

use crate::core::config::ServiceConfig;
use crate::core::engine::{InferenceApiEngine, TranslationEngine};
use crate::core::errors::TranslationError;
use crate::core::languages::SUPPORTED_LANGUAGES;
use crate::core::models::{Language, TranslationRequest, TranslationResponse};
use crate::core::translator::LineTranslator;

/// Application state
#[derive(Clone)]
pub struct AppState {
    translator: Arc<LineTranslator>,
}

impl AppState {
    pub fn new(translator: LineTranslator) -> Self {
        Self {
            translator: Arc::new(translator),
        }
    }
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub model: String,
}

/// Supported languages response
#[derive(Serialize)]
pub struct LanguagesResponse {
    pub model: String,
    pub languages: Vec<Language>,
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Handler error carrying the status it maps to
#[derive(Debug)]
pub struct ApiError(TranslationError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            detail: self.0.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health_check, translate),
    components(schemas(TranslationRequest, TranslationResponse, ErrorResponse, HealthResponse))
)]
pub struct ApiDoc;

/// Health check handler
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
async fn health_check(State(state): State<Arc<AppState>>) -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.translator.model_id().to_string(),
    })
}

/// Supported languages handler
async fn list_languages(State(state): State<Arc<AppState>>) -> axum::Json<LanguagesResponse> {
    axum::Json(LanguagesResponse {
        model: state.translator.model_id().to_string(),
        languages: SUPPORTED_LANGUAGES.to_vec(),
    })
}

async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

/// Translation handler
#[utoipa::path(
    post,
    path = "/translate",
    request_body = TranslationRequest,
    responses(
        (status = 200, description = "Translated text", body = TranslationResponse),
        (status = 400, description = "Unsupported language or rejected input", body = ErrorResponse),
        (status = 500, description = "Engine failure", body = ErrorResponse)
    )
)]
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslationRequest>,
) -> Result<axum::Json<TranslationResponse>, ApiError> {
    match state.translator.translate(&payload).await {
        Ok(response) => Ok(axum::Json(response)),
        Err(e) => {
            warn!(
                "Translation {} -> {} failed: {}",
                payload.source_language, payload.target_language, e
            );
            Err(e.into())
        }
    }
}

/// Build the router for the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/translate", post(translate))
        .route("/languages", get(list_languages))
        .route("/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the HTTP server
pub async fn run_server(config: ServiceConfig) -> anyhow::Result<()> {
    // The engine is built once here and shared by every request
    let engine: Arc<dyn TranslationEngine> = Arc::new(InferenceApiEngine::from_config(&config)?);
    let translator = LineTranslator::from_config(engine, &config);

    let app = router(AppState::new(translator));

    let addr: SocketAddr = config.bind_address().parse()?;

    info!(
        "Starting server on {} (model: {}, segmentation: {})",
        addr, config.model, config.segmentation
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
