//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body could not be read as a submission
    #[error("{0}")]
    MalformedBody(String),

    /// Scoring backend failed
    #[error("scoring failed: {0}")]
    ScoringError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::MalformedBody(msg) => {
                tracing::debug!("Rejected submission: {}", msg);
                (StatusCode::BAD_REQUEST, msg.as_str())
            }
            AppError::ScoringError(msg) => {
                tracing::error!("Scoring error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Scoring failed")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedBody(err.to_string())
    }
}
