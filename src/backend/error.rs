//! Backend error types
//!
//! Every failure of a backend call lands in one of these variants. Call sites
//! collapse them into a single user-visible outcome each.

use thiserror::Error;

/// Errors that can occur when talking to the question-answering backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// Could not connect to the backend
    #[error("Backend unavailable")]
    Unavailable,

    /// The configured request timeout elapsed
    #[error("Request timeout")]
    Timeout,

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Classify a transport error the same way for every endpoint
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else if err.is_connect() {
            BackendError::Unavailable
        } else {
            BackendError::Request(err)
        }
    }
}

/// Result type alias for backend operations
pub type BackendResult<T> = Result<T, BackendError>;
