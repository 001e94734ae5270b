//! Chat panel state: transcript, input buffer and the loading gate.

use crate::backend::{Answer, Backend, BackendResult};

use super::message::Message;

/// Ticket for the single outstanding question.
///
/// Returned by [`ChatPanel::begin_submit`] and consumed by
/// [`ChatPanel::complete`], so each accepted question completes exactly once.
#[derive(Debug)]
#[must_use = "a pending question must be completed to clear the loading flag"]
pub struct PendingQuestion {
    question: String,
}

impl PendingQuestion {
    pub fn question(&self) -> &str {
        &self.question
    }
}

/// View state of the chat panel
#[derive(Debug, Default)]
pub struct ChatPanel {
    transcript: Vec<Message>,
    input: String,
    loading: bool,
    revision: u64,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in send/receive order
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Bumped on every transcript mutation; the view scrolls to the newest
    /// message whenever it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether `question` would be accepted right now
    pub fn can_submit(&self, question: &str) -> bool {
        !question.trim().is_empty() && !self.loading
    }

    /// Guard half of a submission.
    ///
    /// Rejects blank input and submissions while a question is in flight.
    /// On acceptance appends the user message, clears the input buffer and
    /// raises the loading flag.
    pub fn begin_submit(&mut self, question: &str) -> Option<PendingQuestion> {
        if !self.can_submit(question) {
            tracing::debug!(loading = self.loading, "Submission rejected");
            return None;
        }

        self.push(Message::user(question));
        self.input.clear();
        self.loading = true;

        Some(PendingQuestion {
            question: question.to_string(),
        })
    }

    /// Continuation half of a submission. Always clears the loading flag.
    pub fn complete(&mut self, pending: PendingQuestion, result: BackendResult<Answer>) {
        let reply = match result {
            Ok(answer) => Message::bot(answer.answer, answer.sources),
            Err(e) => {
                tracing::error!(error = %e, question = %pending.question, "Error getting answer");
                Message::failure()
            }
        };

        self.push(reply);
        self.loading = false;
    }

    /// Submit a question and wait for its answer.
    ///
    /// Returns `false` when the guard rejected the question.
    pub async fn submit(&mut self, question: &str, backend: &dyn Backend) -> bool {
        let Some(pending) = self.begin_submit(question) else {
            return false;
        };

        let result = backend.ask(pending.question()).await;
        self.complete(pending, result);
        true
    }

    fn push(&mut self, message: Message) {
        self.transcript.push(message);
        self.revision += 1;
    }
}
