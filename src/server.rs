//! HTTP surface: `POST /translate` and `GET /health`.

use crate::errors::TranslateError;
use crate::orchestrator::{Orchestrator, TranslationRequest, TranslationResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/translate", post(translate))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Error returned by handlers, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Translate(TranslateError),
}

impl From<TranslateError> for ApiError {
    fn from(error: TranslateError) -> Self {
        Self::Translate(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Translate(TranslateError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Translate(TranslateError::Completion(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Translate(TranslateError::Task(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(message) => message,
            ApiError::Translate(error) => error.to_string(),
        };

        if status.is_server_error() {
            error!("Request failed ({}): {}", status, message);
        } else {
            warn!("Request rejected ({}): {}", status, message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.orchestrator.handle(request).await?;
    Ok(Json(response))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
