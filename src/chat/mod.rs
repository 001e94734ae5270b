//! Chat Panel
//!
//! Owns the transcript and drives question submission.
//!
//! A submission is split around its single backend call:
//!
//! 1. [`ChatPanel::begin_submit`] runs the loading guard and appends the user
//!    message synchronously.
//! 2. The caller awaits [`Backend::ask`](crate::backend::Backend::ask)
//!    without holding the panel.
//! 3. [`ChatPanel::complete`] appends the answer (or the fixed error reply)
//!    and clears the loading flag.

mod message;
mod panel;

pub use message::{Message, Sender, ERROR_REPLY};
pub use panel::{ChatPanel, PendingQuestion};
