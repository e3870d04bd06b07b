//! Application error type mapping to HTTP status codes.
//!
//! Error bodies share one shape:
//! ```json
//! { "errors": [{ "code": "SESSION_NOT_FOUND", "message": "..." }] }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use banter_types::error::SessionError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Session lookup errors.
    Session(SessionError),
    /// Malformed request body.
    Validation { status: StatusCode, message: String },
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Session(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Session(e @ SessionError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND", e.to_string())
            }
            AppError::Validation { status, message } => (status, "VALIDATION_ERROR", message),
        };

        let body = json!({
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
