//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::ingest::decode_latin1;

use super::dto::*;
use super::state::AppState;

/// Largest accepted schedule upload.
const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/connections", post(connections))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Run the pipeline over an uploaded schedule file.
///
/// The body is the raw Latin-1 file.
async fn connections(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConnectionReport>, AppError> {
    if body.is_empty() {
        return Err(AppError::BadRequest {
            message: "empty schedule file".to_string(),
        });
    }

    let report = tokio::task::spawn_blocking(move || {
        let text = decode_latin1(&body);
        let output = state.pipeline.run(&text);
        ConnectionReport::build(&output, &state.names)
    })
    .await?;

    Ok(Json(report))
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Internal {
            message: format!("pipeline task failed: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(%status, error = %self, "request failed");
        } else {
            warn!(%status, error = %self, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
