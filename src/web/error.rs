//! Host Error Types
//!
//! Errors raised by the page host itself, as opposed to backend failures,
//! which the components turn into transcript entries or alerts.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Host error types
#[derive(Error, Debug)]
pub enum WebError {
    /// Request could not be used as submitted
    #[error("Validation error: {0}")]
    Validation(String),

    /// Multipart body could not be read
    #[error("Upload error: {0}")]
    Multipart(#[from] MultipartError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl WebError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            WebError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            WebError::Multipart(e) => (e.status(), "UPLOAD_ERROR"),
            WebError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            WebError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Host error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for host operations
pub type WebResult<T> = Result<T, WebError>;
