//! Copy-to-clipboard feedback indicator.
//!
//! One indicator per page, keyed by the code block's language tag. Blocks of
//! the same language share the indicator.

use std::time::Duration;
use tokio::time::Instant;

/// How long the "Copied!" feedback stays up
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// What a copy control should display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copied,
}

#[derive(Debug, Clone)]
struct CopiedMark {
    language: String,
    until: Instant,
}

/// `idle -> copied(lang) -> idle` after [`COPY_FEEDBACK`], or when another
/// click supersedes it
#[derive(Debug, Clone, Default)]
pub struct CopyIndicator {
    mark: Option<CopiedMark>,
}

impl CopyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click on a copy control. Restarts the timer.
    pub fn click(&mut self, language: &str, now: Instant) {
        self.mark = Some(CopiedMark {
            language: language.to_string(),
            until: now + COPY_FEEDBACK,
        });
    }

    /// State of the control for `language` at `now`
    pub fn state(&self, language: &str, now: Instant) -> CopyState {
        match &self.mark {
            Some(mark) if mark.language == language && now < mark.until => CopyState::Copied,
            _ => CopyState::Idle,
        }
    }

    /// Drop an expired mark
    pub fn expire(&mut self, now: Instant) {
        if self.mark.as_ref().is_some_and(|mark| now >= mark.until) {
            self.mark = None;
        }
    }

    /// Time left before the indicator reverts, if it is showing
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.mark
            .as_ref()
            .filter(|mark| now < mark.until)
            .map(|mark| mark.until - now)
    }
}
