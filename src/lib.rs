//! # Prep Bot
//!
//! Chat client for a document question-answering assistant. Students ask
//! questions about uploaded course documents and read the answers rendered
//! as rich markdown with code blocks, tables and math.
//!
//! ## Modules
//!
//! - [`backend`]: HTTP client for the question-answering service
//! - [`chat`]: Transcript, input buffer and the single in-flight question
//! - [`sidebar`]: Document list and upload
//! - [`shell`]: Page layout state
//! - [`render`]: Message cleaning and markdown rendering
//! - [`web`]: Local page host with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prepbot::backend::{BackendClient, BackendConfig};
//! use prepbot::chat::ChatPanel;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = BackendClient::new(BackendConfig::default())?;
//!     let mut chat = ChatPanel::new();
//!
//!     chat.submit("What is entropy?", &backend).await;
//!
//!     for message in chat.transcript() {
//!         println!("{:?}: {}", message.sender, message.text);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod chat;
pub mod config;
pub mod render;
pub mod shell;
pub mod sidebar;
pub mod web;

// Re-export top-level types for convenience
pub use backend::{
    Answer, Backend, BackendClient, BackendConfig, BackendError, BackendResult, Document,
    UploadFile,
};

pub use chat::{ChatPanel, Message, PendingQuestion, Sender};

pub use sidebar::{Sidebar, UploadOutcome};

pub use shell::Shell;

pub use render::{clean_message_text, render_message, CopyIndicator, RenderContext};

pub use config::{Config, ConfigError};

pub use web::{build_router, serve, AppState, WebError};
