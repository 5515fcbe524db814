//! Maps domain `AppError` to HTTP responses.
//!
//! `AppError` lives in `ontrack-core`, so the response mapping hangs off the
//! local [`ApiError`] wrapper. Handlers and extractors return `ApiError`; `?`
//! on an `AppResult` converts through `From`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use ontrack_core::error::{AppError, ErrorKind, FieldError};

/// Standard API failure body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Short error label.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Machine-readable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Field-level validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

impl ApiErrorResponse {
    /// Creates a failure body without details.
    pub fn new(error: &str, message: impl Into<String>, code: &str) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            message: message.into(),
            code: Some(code.to_string()),
            details: Vec::new(),
        }
    }

    /// Pairs the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self(err) = self;
        let (status, label, default_code) = match err.kind {
            ErrorKind::Validation => {
                (StatusCode::BAD_REQUEST, "Validation Error", "VALIDATION_ERROR")
            }
            ErrorKind::MalformedRequest => (StatusCode::BAD_REQUEST, "Bad Request", "BAD_REQUEST"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not found", "NOT_FOUND"),
            ErrorKind::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Service Unavailable",
                "SERVICE_UNAVAILABLE",
            ),
            ErrorKind::Timeout
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                "INTERNAL_ERROR",
            ),
        };

        let message = if status.is_server_error() {
            tracing::error!(
                kind = %err.kind,
                error = %err.message,
                source = ?err.source,
                "Internal server error"
            );
            if err.kind == ErrorKind::Timeout {
                "The request took too long to complete".to_string()
            } else {
                "An unexpected error occurred".to_string()
            }
        } else {
            err.message
        };

        let body = ApiErrorResponse {
            success: false,
            error: label.to_string(),
            message,
            code: Some(err.code.unwrap_or(default_code).to_string()),
            details: err.details,
        };

        body.into_response_with(status)
    }
}
