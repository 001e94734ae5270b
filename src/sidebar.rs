//! Sidebar
//!
//! Document list fetched from the backend on mount, plus the upload path.
//! Fetch failures degrade silently; upload failures raise one alert.

use crate::backend::{Backend, BackendResult, Document, UploadFile};

/// Alert text shown when an upload fails
pub const UPLOAD_FAILED_ALERT: &str = "Failed to upload document";

/// File types offered by the upload picker
pub const ACCEPTED_UPLOAD_TYPES: &str = ".pdf,.txt,.docx";

/// Ticket for the upload in progress
#[derive(Debug)]
#[must_use = "a pending upload must be finished to clear the uploading flag"]
pub struct PendingUpload {
    file_name: String,
}

impl PendingUpload {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// What happened to a finished upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Uploaded; the document list should be refreshed
    Uploaded,
    /// Failed; an alert is pending
    Failed,
}

/// View state of the sidebar
#[derive(Debug, Default)]
pub struct Sidebar {
    documents: Vec<Document>,
    uploading: bool,
    alert: Option<String>,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Pending alert, if any, without clearing it
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Take the pending alert so it is shown exactly once
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// Apply the result of a document fetch.
    ///
    /// A successful fetch replaces the whole list. A failure is logged and
    /// leaves the list as it was.
    pub fn apply_documents(&mut self, result: BackendResult<Vec<Document>>) {
        match result {
            Ok(documents) => {
                tracing::debug!(count = documents.len(), "Document list refreshed");
                self.documents = documents;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching documents");
            }
        }
    }

    /// Fetch the document list and apply it
    pub async fn refresh_documents(&mut self, backend: &dyn Backend) {
        let result = backend.list_documents().await;
        self.apply_documents(result);
    }

    /// Start an upload. Rejected while another upload is running.
    pub fn begin_upload(&mut self, file: &UploadFile) -> Option<PendingUpload> {
        if self.uploading {
            return None;
        }

        self.uploading = true;
        Some(PendingUpload {
            file_name: file.file_name.clone(),
        })
    }

    /// Finish an upload. Always clears the uploading flag.
    pub fn finish_upload(&mut self, pending: PendingUpload, result: BackendResult<()>) -> UploadOutcome {
        self.uploading = false;

        match result {
            Ok(()) => {
                tracing::info!(file = %pending.file_name, "Document uploaded");
                UploadOutcome::Uploaded
            }
            Err(e) => {
                tracing::error!(error = %e, file = %pending.file_name, "Error uploading document");
                self.alert = Some(UPLOAD_FAILED_ALERT.to_string());
                UploadOutcome::Failed
            }
        }
    }

    /// Upload a file and refresh the document list on success.
    ///
    /// Returns `None` when another upload was already running.
    pub async fn upload(&mut self, file: UploadFile, backend: &dyn Backend) -> Option<UploadOutcome> {
        let pending = self.begin_upload(&file)?;
        let result = backend.upload(file).await;
        let outcome = self.finish_upload(pending, result);

        if outcome == UploadOutcome::Uploaded {
            self.refresh_documents(backend).await;
        }
        Some(outcome)
    }
}
