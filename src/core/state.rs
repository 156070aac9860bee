//! # Application State
//!
//! Core business state for Chawen. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── lang: Lang                   // chrome language (zh/en)
//! ├── status: Status               // request lifecycle
//! ├── transcript: Transcript       // conversation history
//! ├── pending: RevealBuffer        // decoded but not yet revealed
//! ├── error: Option<String>        // user-visible error message
//! ├── request_seq: u64             // cancellation token for async actions
//! ├── reveal_active: bool          // whether a reveal timer is running
//! └── quick_questions: Vec<QuickQuestion>
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::QuickQuestion;
use crate::core::lang::{Labels, Lang};
use crate::core::reveal::RevealBuffer;
use crate::core::transcript::Transcript;

/// Lifecycle of the current (or most recent) request. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// No request underway: startup, after reset, or after cancel.
    #[default]
    Idle,
    /// A request is in flight; the stream has not finished.
    Loading,
    /// The stream completed normally. Reveal may still be draining.
    Done,
    /// The request failed; `App::error` carries the message.
    Error,
}

impl Status {
    pub fn label(self, labels: &Labels) -> &'static str {
        match self {
            Status::Idle => labels.status_idle,
            Status::Loading => labels.status_loading,
            Status::Done => labels.status_done,
            Status::Error => labels.status_error,
        }
    }
}

pub struct App {
    pub lang: Lang,
    pub status: Status,
    pub transcript: Transcript,
    pub pending: RevealBuffer,
    pub error: Option<String>,
    /// Bumped on every submit/cancel/reset. Stream actions carry the value
    /// they were spawned under; the reducer drops mismatches, so aborted
    /// requests cannot mutate state even if a callback slips through.
    pub request_seq: u64,
    pub reveal_active: bool,
    pub quick_questions: Vec<QuickQuestion>,
}

impl App {
    pub fn new(lang: Lang, quick_questions: Vec<QuickQuestion>) -> Self {
        Self {
            lang,
            status: Status::Idle,
            transcript: Transcript::new(),
            pending: RevealBuffer::new(),
            error: None,
            request_seq: 0,
            reveal_active: false,
            quick_questions,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        self.lang.labels()
    }
}
