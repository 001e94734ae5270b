//! Scripted backend double for component and route tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Semaphore;

use super::{Answer, Backend, BackendError, BackendResult, Document, UploadFile};

/// Replays queued results in order. An empty queue answers with
/// [`BackendError::Unavailable`].
#[derive(Default)]
pub(crate) struct MockBackend {
    answers: Mutex<VecDeque<BackendResult<Answer>>>,
    documents: Mutex<VecDeque<BackendResult<Vec<Document>>>>,
    uploads: Mutex<VecDeque<BackendResult<()>>>,
    uploaded: Mutex<Vec<String>>,
    questions: Mutex<Vec<String>>,
    ask_calls: AtomicUsize,
    document_calls: AtomicUsize,
    /// When set, `ask` waits for a permit before answering
    ask_gate: Option<Semaphore>,
    /// When set, `upload` waits for a permit before answering
    upload_gate: Option<Semaphore>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every `ask` until [`MockBackend::release_ask`] is called
    pub fn gated() -> Self {
        Self {
            ask_gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    pub fn release_ask(&self) {
        if let Some(gate) = &self.ask_gate {
            gate.add_permits(1);
        }
    }

    /// Hold every `upload` until [`MockBackend::release_upload`] is called
    pub fn gated_upload() -> Self {
        Self {
            upload_gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    pub fn release_upload(&self) {
        if let Some(gate) = &self.upload_gate {
            gate.add_permits(1);
        }
    }

    pub fn with_answer(self, text: &str, sources: Option<Vec<&str>>) -> Self {
        self.answers.lock().unwrap().push_back(Ok(Answer {
            answer: text.to_string(),
            sources: sources.map(|s| s.into_iter().map(String::from).collect()),
        }));
        self
    }

    pub fn with_ask_error(self, err: BackendError) -> Self {
        self.answers.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn with_documents(self, names: &[&str]) -> Self {
        self.documents
            .lock()
            .unwrap()
            .push_back(Ok(names.iter().map(|n| Document::new(*n)).collect()));
        self
    }

    pub fn with_documents_error(self, err: BackendError) -> Self {
        self.documents.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn with_upload_result(self, result: BackendResult<()>) -> Self {
        self.uploads.lock().unwrap().push_back(result);
        self
    }

    pub fn ask_calls(&self) -> usize {
        self.ask_calls.load(Ordering::SeqCst)
    }

    pub fn document_calls(&self) -> usize {
        self.document_calls.load(Ordering::SeqCst)
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }

    pub fn uploaded(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn ask(&self, question: &str) -> BackendResult<Answer> {
        self.ask_calls.fetch_add(1, Ordering::SeqCst);
        self.questions.lock().unwrap().push(question.to_string());

        if let Some(gate) = &self.ask_gate {
            gate.acquire()
                .await
                .map_err(|_| BackendError::Unavailable)?
                .forget();
        }

        let next = self.answers.lock().unwrap().pop_front();
        next.unwrap_or(Err(BackendError::Unavailable))
    }

    async fn list_documents(&self) -> BackendResult<Vec<Document>> {
        self.document_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.documents.lock().unwrap().pop_front();
        next.unwrap_or(Err(BackendError::Unavailable))
    }

    async fn upload(&self, file: UploadFile) -> BackendResult<()> {
        self.uploaded.lock().unwrap().push(file.file_name);

        if let Some(gate) = &self.upload_gate {
            gate.acquire()
                .await
                .map_err(|_| BackendError::Unavailable)?
                .forget();
        }

        let next = self.uploads.lock().unwrap().pop_front();
        next.unwrap_or(Err(BackendError::Unavailable))
    }
}
