//! # Actions
//!
//! Everything that can happen in Chawen becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! A network chunk decodes? That's `Action::StreamChunk`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the runtime what to do next (spawn a request, start or
//! stop the reveal timer). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Async actions carry the request sequence number they were spawned under.
//! `update()` drops any whose number no longer matches `app.request_seq`, so
//! an aborted request cannot touch state even when its final messages are
//! already sitting in the channel.

use crate::core::state::{App, Status};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// User submitted a question (typed or quick). Untrimmed.
    Submit(String),
    /// User cancelled the in-flight request.
    Cancel,
    /// User cleared the conversation.
    Reset,
    /// Decoded text arrived from the stream spawned under `seq`.
    StreamChunk { seq: u64, text: String },
    /// The stream spawned under `seq` ended normally.
    StreamDone { seq: u64 },
    /// The stream spawned under `seq` failed; `message` is user-visible.
    StreamFailed { seq: u64, message: String },
    /// The reveal timer fired: move one character to the transcript.
    RevealTick,
    Quit,
}

/// What the runtime must do after an `update()`. The reducer never performs
/// I/O itself; it hands the event loop one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Abort any previous request and reveal timer, then open the stream.
    SpawnStream { seq: u64, question: String },
    /// Abort the in-flight request and the reveal timer.
    HaltStream,
    /// Start the reveal timer (none is running).
    StartReveal,
    /// Stop the reveal timer (the buffer drained).
    StopReveal,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            let question = text.trim();
            if question.is_empty() {
                // Validation failure: message only, no request, status untouched.
                app.error = Some(app.labels().validation_empty.to_string());
                return Effect::None;
            }
            app.request_seq += 1;
            app.error = None;
            app.pending.clear();
            app.reveal_active = false;
            app.transcript.push_user(question);
            app.transcript.begin_answer();
            app.status = Status::Loading;
            Effect::SpawnStream {
                seq: app.request_seq,
                question: question.to_string(),
            }
        }

        Action::Cancel => {
            if app.status != Status::Loading {
                return Effect::None;
            }
            // Invalidate everything still in flight; keep the transcript as
            // it stands. Cancellation is not an error. The reveal buffer is
            // kept but never drained; the next submit or reset clears it.
            app.request_seq += 1;
            app.status = Status::Idle;
            app.error = None;
            app.reveal_active = false;
            Effect::HaltStream
        }

        Action::Reset => {
            app.request_seq += 1;
            app.transcript.clear();
            app.pending.clear();
            app.error = None;
            app.reveal_active = false;
            app.status = Status::Idle;
            Effect::HaltStream
        }

        Action::StreamChunk { seq, text } => {
            if seq != app.request_seq || app.status != Status::Loading {
                return Effect::None; // stale delivery
            }
            app.pending.push_text(&text);
            if !app.reveal_active && !app.pending.is_empty() {
                app.reveal_active = true;
                return Effect::StartReveal;
            }
            Effect::None
        }

        Action::StreamDone { seq } => {
            if seq != app.request_seq || app.status != Status::Loading {
                return Effect::None;
            }
            // The animation owns whatever is still buffered; the timer keeps
            // draining after completion.
            app.status = Status::Done;
            Effect::None
        }

        Action::StreamFailed { seq, message } => {
            if seq != app.request_seq || app.status != Status::Loading {
                return Effect::None;
            }
            // Characters already received keep revealing: displayed content
            // must equal received content even on a failed stream.
            app.status = Status::Error;
            app.error = Some(message);
            Effect::None
        }

        Action::RevealTick => {
            if !app.reveal_active {
                return Effect::None; // straggler tick from an aborted timer
            }
            match app.pending.pop() {
                Some(ch) => {
                    app.transcript.push_char(ch);
                    Effect::None
                }
                None => {
                    app.reveal_active = false;
                    Effect::StopReveal
                }
            }
        }

        Action::Quit => Effect::Quit,
    }
}
