//! Backend Integration
//!
//! Talks to the remote question-answering service.
//!
//! ## Endpoints
//!
//! - `POST /ask` (form field `question`) → `{ answer, sources? }`
//! - `GET /documents` → `{ documents: [{ name }] }`
//! - `POST /upload` (multipart field `file`) → opaque success/failure
//!
//! Components depend on the [`Backend`] trait, not on the HTTP client, so the
//! chat panel and sidebar can be driven by a scripted double in tests.

mod client;
mod dto;
mod error;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{BackendClient, BackendConfig, DEFAULT_API_URL};
pub use dto::{Answer, Document, UploadFile};
pub use error::{BackendError, BackendResult};

use async_trait::async_trait;

/// The three calls the client makes against the backend
#[async_trait]
pub trait Backend: Send + Sync {
    /// Ask a question about the uploaded documents
    async fn ask(&self, question: &str) -> BackendResult<Answer>;

    /// List the uploaded documents
    async fn list_documents(&self) -> BackendResult<Vec<Document>>;

    /// Upload a single document
    async fn upload(&self, file: UploadFile) -> BackendResult<()>;
}
