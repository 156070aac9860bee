//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! state machine never sees a terminal; it hands this loop `Effect` values
//! and this loop turns them into spawned tasks and aborted tasks.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (loading spinner, reveal in progress): polls on a short
//!   timeout so the 24ms reveal ticks sitting in the channel are drained
//!   promptly and every revealed character reaches the screen.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Task bookkeeping
//!
//! At most one request (two tokio tasks) and one reveal timer are ever
//! alive. Their `AbortHandle`s live in [`Tasks`]; every `SpawnStream` or
//! `HaltStream` effect aborts the old ones first. Aborting is best-effort
//! cancellation — actions already queued from an aborted task are dropped
//! by the reducer's sequence-number guard, not here.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::reveal::REVEAL_INTERVAL;
use crate::core::state::{App, Status};
use crate::qa::QaClient;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture, // wheel scrolling over the transcript
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Abort handles for everything running on behalf of the current request.
#[derive(Default)]
struct Tasks {
    stream: Vec<AbortHandle>,
    reveal: Option<AbortHandle>,
}

impl Tasks {
    /// Aborts the in-flight request and the reveal timer.
    fn halt_stream(&mut self) {
        for handle in self.stream.drain(..) {
            handle.abort();
        }
        self.halt_reveal();
    }

    fn halt_reveal(&mut self) {
        if let Some(handle) = self.reveal.take() {
            handle.abort();
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = QaClient::new(config.base_url.clone());
    let mut app = App::new(config.lang, config.quick_questions.clone());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            ratatui::restore();
            return Err(e);
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut tasks = Tasks::default();
    let mut should_quit = false;

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Animations run while a request is loading (spinner) or characters
        // are still typing out.
        let animating = app.status == Status::Loading || app.reveal_active;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (so reveal ticks reach
        // the screen at their 24ms cadence), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(16)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match tui_event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                TuiEvent::ForceQuit => {
                    let effect = update(&mut app, Action::Quit);
                    dispatch(effect, &mut tasks, &client, &tx, &mut should_quit);
                }

                // Esc cancels the in-flight request; otherwise it is a no-op
                TuiEvent::Escape => {
                    if app.status == Status::Loading {
                        let effect = update(&mut app, Action::Cancel);
                        dispatch(effect, &mut tasks, &client, &tx, &mut should_quit);
                    }
                }

                TuiEvent::Reset => {
                    let effect = update(&mut app, Action::Reset);
                    dispatch(effect, &mut tasks, &client, &tx, &mut should_quit);
                    tui.message_list = MessageListState::new();
                }

                TuiEvent::ToggleLang => {
                    app.lang = app.lang.toggle();
                }

                // Quick questions go through the exact same submit path as
                // typed input
                TuiEvent::QuickQuestion(index) => {
                    if let Some(question) = app.quick_questions.get(index) {
                        let text = question.text(app.lang).to_string();
                        let effect = update(&mut app, Action::Submit(text));
                        dispatch(effect, &mut tasks, &client, &tx, &mut should_quit);
                    }
                }

                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.message_list.handle_event(&tui_event);
                }

                // Everything else is text editing
                other => {
                    if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&other) {
                        let effect = update(&mut app, Action::Submit(text));
                        dispatch(effect, &mut tasks, &client, &tx, &mut should_quit);
                    }
                }
            }
        }

        // Handle background task actions (stream chunks, reveal ticks)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            dispatch(effect, &mut tasks, &client, &tx, &mut should_quit);
        }

        if should_quit {
            break;
        }
    }

    tasks.halt_stream();
    ratatui::restore();
    Ok(())
}

/// Executes one reducer effect. All task lifecycle lives here; the reducer
/// itself never spawns or aborts anything.
fn dispatch(
    effect: Effect,
    tasks: &mut Tasks,
    client: &QaClient,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match effect {
        Effect::None => {}
        Effect::SpawnStream { seq, question } => {
            tasks.halt_stream();
            tasks.stream = spawn_stream(client, seq, question, tx.clone());
        }
        Effect::HaltStream => tasks.halt_stream(),
        Effect::StartReveal => {
            tasks.halt_reveal();
            tasks.reveal = Some(spawn_reveal(tx.clone()));
        }
        Effect::StopReveal => tasks.halt_reveal(),
        Effect::Quit => *should_quit = true,
    }
}

/// Opens the answer stream for `question` under sequence number `seq`.
///
/// Two tasks per request: the client task reads and decodes the HTTP body,
/// and a forwarding task turns decoded text into seq-tagged `StreamChunk`
/// actions. The client task awaits the forwarder before sending the final
/// `StreamDone`/`StreamFailed`, so the verdict never overtakes a chunk.
fn spawn_stream(
    client: &QaClient,
    seq: u64,
    question: String,
    tx: mpsc::Sender<Action>,
) -> Vec<AbortHandle> {
    info!("Spawning QA request (seq={})", seq);

    let client = client.clone();

    // Async channel for decoded answer text
    let (chunk_tx, mut chunk_rx) = tokio::sync::mpsc::channel::<String>(100);

    let tx_forward = tx.clone();
    let forward_handle = tokio::spawn(async move {
        while let Some(text) = chunk_rx.recv().await {
            debug!("Forwarding StreamChunk (seq={}, len={})", seq, text.len());
            if tx_forward.send(Action::StreamChunk { seq, text }).is_err() {
                warn!("Failed to forward StreamChunk: receiver dropped");
                return;
            }
        }
    });
    let forward_abort = forward_handle.abort_handle();

    let stream_handle = tokio::spawn(async move {
        let result = client.stream_answer(&question, chunk_tx).await;
        // All chunks are forwarded before the verdict goes out.
        let _ = forward_handle.await;
        let action = match result {
            Ok(()) => Action::StreamDone { seq },
            Err(e) => {
                info!("Stream failed (seq={}): {}", seq, e);
                Action::StreamFailed {
                    seq,
                    message: e.to_string(),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send stream verdict: receiver dropped");
        }
    });

    vec![stream_handle.abort_handle(), forward_abort]
}

/// Starts the reveal timer: one `RevealTick` per interval until aborted.
/// The reducer stops it (via `Effect::StopReveal`) when the buffer drains.
fn spawn_reveal(tx: mpsc::Sender<Action>) -> AbortHandle {
    debug!("Starting reveal timer");
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(REVEAL_INTERVAL);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Action::RevealTick).is_err() {
                return;
            }
        }
    });
    handle.abort_handle()
}
