use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as a flat `{"error": "<message>"}` body. Server
/// errors log their detail with `tracing` and never expose stack traces to
/// the caller.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client sent a missing, non-string, or blank field.
    #[error("{0} is required")]
    Validation(String),

    /// No Gemini API key was configured at startup.
    #[error("Server configuration error: API key not found")]
    MissingApiKey,

    /// The cascade exhausted and the last error points at a bad credential.
    #[error("Invalid or missing Gemini API key. Check GEMINI_API_KEY.")]
    InvalidApiKey(String),

    /// The cascade exhausted and the last error points at an unavailable model.
    #[error("Model not available for this API key. Please try again later.")]
    ModelUnavailable(String),

    /// The cascade exhausted for any other reason.
    #[error("Failed to fetch salary estimate: {0}")]
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey => {
                tracing::error!("salary request refused: GEMINI_API_KEY is not configured");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::InvalidApiKey(detail) => {
                tracing::error!("cascade exhausted on credential error: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::ModelUnavailable(detail) => {
                tracing::error!("cascade exhausted on model availability: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Upstream(detail) => {
                tracing::error!("cascade exhausted: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
