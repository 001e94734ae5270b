//! Backend REST Client
//!
//! HTTP client for the question-answering backend. One attempt per call:
//! no retries, no backoff.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{Answer, Document, DocumentList, UploadFile};
use super::error::{BackendError, BackendResult};
use super::Backend;

/// Default backend base URL
pub const DEFAULT_API_URL: &str = "https://prep-bot-backend.onrender.com";

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend (e.g., "https://prep-bot-backend.onrender.com")
    pub base_url: String,
    /// Optional request timeout. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// reqwest-backed implementation of [`Backend`]
pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Create a new client with the given configuration
    pub fn new(config: BackendConfig) -> BackendResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Backend for BackendClient {
    async fn ask(&self, question: &str) -> BackendResult<Answer> {
        let response = self
            .client
            .post(self.url("ask"))
            .form(&[("question", question)])
            .send()
            .await
            .map_err(BackendError::from_transport)?;

        decode(response).await
    }

    async fn list_documents(&self) -> BackendResult<Vec<Document>> {
        let response = self
            .client
            .get(self.url("documents"))
            .send()
            .await
            .map_err(BackendError::from_transport)?;

        let list: DocumentList = decode(response).await?;
        Ok(list.documents)
    }

    async fn upload(&self, file: UploadFile) -> BackendResult<()> {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(BackendError::from_transport)?;

        ensure_success(response).await.map(|_| ())
    }
}

/// Turn a non-2xx response into [`BackendError::Status`]
async fn ensure_success(response: Response) -> BackendResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(BackendError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
    let response = ensure_success(response).await?;
    let body = response
        .bytes()
        .await
        .map_err(BackendError::from_transport)?;

    serde_json::from_slice(&body).map_err(|e| BackendError::Decode(e.to_string()))
}
