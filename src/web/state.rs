//! Application State
//!
//! Shared state accessible by all page handlers. The component state sits
//! behind one lock; the lock is never held across a backend call.

use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::backend::{Backend, UploadFile};
use crate::chat::ChatPanel;
use crate::config::Config;
use crate::render::CopyIndicator;
use crate::shell::Shell;
use crate::sidebar::{Sidebar, UploadOutcome};

/// Everything the page renders from
#[derive(Debug, Default)]
pub struct PageState {
    pub shell: Shell,
    pub sidebar: Sidebar,
    pub chat: ChatPanel,
    pub copy: CopyIndicator,
}

impl PageState {
    pub fn new(shell: Shell) -> Self {
        Self {
            shell,
            ..Self::default()
        }
    }
}

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Question-answering backend
    pub backend: Arc<dyn Backend>,
    /// Host configuration
    pub config: Arc<Config>,
    /// Component state
    pub page: Arc<RwLock<PageState>>,
}

impl AppState {
    pub fn new(backend: Arc<dyn Backend>, config: Config) -> Self {
        let shell = Shell::new(config.ui.sidebar_visible);
        Self {
            backend,
            config: Arc::new(config),
            page: Arc::new(RwLock::new(PageState::new(shell))),
        }
    }

    /// Fetch the document list once, as the sidebar does on mount
    pub fn mount(&self) -> JoinHandle<()> {
        let state = self.clone();
        tokio::spawn(async move {
            tracing::info!("Fetching document list");
            let result = state.backend.list_documents().await;
            state.page.write().await.sidebar.apply_documents(result);
        })
    }

    /// Submit a question without waiting for the answer.
    ///
    /// Returns the continuation task when the chat panel accepted the
    /// question, `None` when it was rejected.
    pub async fn submit_question(&self, question: &str) -> Option<JoinHandle<()>> {
        let pending = {
            let mut page = self.page.write().await;
            let pending = page.chat.begin_submit(question);
            if pending.is_none() && !page.chat.is_loading() {
                page.chat.set_input(question);
            }
            pending?
        };

        tracing::debug!(question = %pending.question(), "Question submitted");

        let state = self.clone();
        Some(tokio::spawn(async move {
            let result = state.backend.ask(pending.question()).await;
            state.page.write().await.chat.complete(pending, result);
        }))
    }

    /// Run one upload to completion, refreshing the list on success.
    ///
    /// The backend call runs in its own task, so the uploading flag is
    /// cleared even if the caller stops waiting. Returns `None` when another
    /// upload was already running.
    pub async fn upload_document(&self, file: UploadFile) -> Option<UploadOutcome> {
        let pending = self.page.write().await.sidebar.begin_upload(&file)?;

        let state = self.clone();
        let task = tokio::spawn(async move {
            let result = state.backend.upload(file).await;
            let outcome = state.page.write().await.sidebar.finish_upload(pending, result);

            if outcome == UploadOutcome::Uploaded {
                let documents = state.backend.list_documents().await;
                state.page.write().await.sidebar.apply_documents(documents);
            }
            outcome
        });

        match task.await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::error!(error = %e, "Upload task failed");
                None
            }
        }
    }
}
