//! Transcript message records.

use serde::{Deserialize, Serialize};

/// Fixed text shown when a question could not be answered
pub const ERROR_REPLY: &str = "Sorry, I encountered an error while processing your question.";

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single transcript entry. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
}

impl Message {
    /// A question typed by the user
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            sources: None,
            error: false,
        }
    }

    /// An answer from the backend
    pub fn bot(text: impl Into<String>, sources: Option<Vec<String>>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            sources,
            error: false,
        }
    }

    /// The synthetic reply appended when a question fails
    pub fn failure() -> Self {
        Self {
            text: ERROR_REPLY.to_string(),
            sender: Sender::Bot,
            sources: None,
            error: true,
        }
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message() {
        let msg = Message::failure();
        assert_eq!(msg.sender, Sender::Bot);
        assert!(msg.error);
        assert_eq!(msg.text, ERROR_REPLY);
    }

    #[test]
    fn test_serialized_shape() {
        let msg = Message::bot("hi", Some(vec!["ch3.pdf".to_string()]));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "hi", "sender": "bot", "sources": ["ch3.pdf"]})
        );

        let json = serde_json::to_value(Message::user("q")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "q", "sender": "user"}));
    }
}
