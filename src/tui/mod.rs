//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a reply outstanding): draws every ~80ms so the typing
//!   spinner stays smooth.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Key Routing
//!
//! Crossterm events are translated context-free in `event.rs`; this module
//! decides what they mean. With the chat panel closed, plain characters are
//! commands (`q`, `c`, `1`-`4`). With it open, they belong to the input box
//! and only Esc/Tab/scroll keys keep shell meaning.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::assistant::{ChatClient, ChatMessage, FALLBACK_REPLY, GeminiClient, ReplyRequest};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, SUGGESTED_PROMPTS, Section};
use crate::tui::component::EventHandler;
use crate::tui::components::{ChatInput, ChatInputEvent, ChatPanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Lines jumped by PageUp/PageDown.
const PAGE_SCROLL: u16 = 10;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Scroll offset into the active section, reset on section change.
    pub section_scroll: u16,
    /// Chat transcript scroll + stick-to-bottom state.
    pub chat_panel: ChatPanelState,
    /// The chat input box.
    pub chat_input: ChatInput,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            section_scroll: 0,
            chat_panel: ChatPanelState::new(),
            chat_input: ChatInput::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
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

/// Build the assistant client from a resolved config.
pub fn build_client(config: &ResolvedConfig) -> Arc<dyn ChatClient> {
    let client = Arc::new(GeminiClient::new(
        config.api_key.clone(),
        Some(config.base_url.clone()),
    ));
    info!("Assistant backend: {}", client.name());
    client
}

/// Apply one action and perform whatever I/O its effect demands.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    let section_before = app.section;
    let effect = update(app, action);
    if app.section != section_before {
        tui.section_scroll = 0;
    }
    match effect {
        Effect::SpawnReply(message) => spawn_reply(app, message, tx.clone()),
        Effect::Quit => *should_quit = true,
        Effect::None => {}
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = build_client(&config);
    let mut app = App::new(client, config.model_name.clone());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // The spinner is the only animation
        let animating = app.chat.pending;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(tui_event, TuiEvent::ForceQuit) {
                dispatch(&mut app, &mut tui, Action::Quit, &tx, &mut should_quit);
                continue;
            }

            if app.chat.open {
                handle_chat_open_event(&mut app, &mut tui, tui_event, &tx, &mut should_quit);
            } else {
                handle_shell_event(&mut app, &mut tui, tui_event, &tx, &mut should_quit);
            }
        }

        if should_quit {
            break;
        }

        // Replies from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(&mut app, &mut tui, action, &tx, &mut should_quit);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Keys while the chat panel is open: editing, sending, and panel scrolling.
/// Tab still cycles sections underneath; the panel and the tabs are
/// independent.
fn handle_chat_open_event(
    app: &mut App,
    tui: &mut TuiState,
    tui_event: TuiEvent,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match tui_event {
        TuiEvent::Escape => dispatch(app, tui, Action::CloseChat, tx, should_quit),
        // Send is disabled while a reply is outstanding; the draft stays put
        TuiEvent::Submit if app.chat.pending => {}
        // Suggested prompts: populate the input and send immediately
        TuiEvent::AltDigit(n) if app.chat.transcript.is_empty() && !app.chat.pending => {
            if let Some(prompt) = SUGGESTED_PROMPTS.get(n as usize - 1) {
                tui.chat_input.set_text(prompt);
                if let Some(text) = tui.chat_input.take_submission() {
                    dispatch(app, tui, Action::SendMessage(text), tx, should_quit);
                }
            }
        }
        TuiEvent::NextTab => dispatch(app, tui, Action::NextSection, tx, should_quit),
        TuiEvent::PrevTab => dispatch(app, tui, Action::PrevSection, tx, should_quit),
        TuiEvent::ScrollUp => tui.chat_panel.scroll_up(1),
        TuiEvent::ScrollDown => tui.chat_panel.scroll_down(1),
        TuiEvent::ScrollPageUp => tui.chat_panel.scroll_up(PAGE_SCROLL),
        TuiEvent::ScrollPageDown => tui.chat_panel.scroll_down(PAGE_SCROLL),
        other => {
            if let Some(ChatInputEvent::Submit(text)) = tui.chat_input.handle_event(&other) {
                dispatch(app, tui, Action::SendMessage(text), tx, should_quit);
            }
        }
    }
}

/// Keys while the chat panel is closed: plain characters are shell commands.
fn handle_shell_event(
    app: &mut App,
    tui: &mut TuiState,
    tui_event: TuiEvent,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match tui_event {
        TuiEvent::InputChar('q') => dispatch(app, tui, Action::Quit, tx, should_quit),
        TuiEvent::InputChar('c') => dispatch(app, tui, Action::OpenChat, tx, should_quit),
        TuiEvent::InputChar(c @ '1'..='4') => {
            let section = Section::ALL[(c as u8 - b'1') as usize];
            dispatch(app, tui, Action::SelectSection(section), tx, should_quit);
        }
        TuiEvent::NextTab => dispatch(app, tui, Action::NextSection, tx, should_quit),
        TuiEvent::PrevTab => dispatch(app, tui, Action::PrevSection, tx, should_quit),
        TuiEvent::ScrollUp => {
            tui.section_scroll = tui.section_scroll.saturating_sub(1);
        }
        // Clamped against the rendered line count on the next draw
        TuiEvent::ScrollDown => {
            tui.section_scroll = tui.section_scroll.saturating_add(1);
        }
        TuiEvent::ScrollPageUp => {
            tui.section_scroll = tui.section_scroll.saturating_sub(PAGE_SCROLL);
        }
        TuiEvent::ScrollPageDown => {
            tui.section_scroll = tui.section_scroll.saturating_add(PAGE_SCROLL);
        }
        _ => {}
    }
}

/// Fire one assistant call for the user turn just appended to the
/// transcript. The reply (or the fallback on any failure) comes back as an
/// `Action::ReplyReceived` on the channel. No abort handle is kept: closing
/// the widget does not cancel the call.
fn spawn_reply(app: &App, message: String, tx: mpsc::Sender<Action>) {
    info!("Spawning assistant request");

    let client = app.client.clone();
    let model = app.model_name.clone();
    // Prior turns only: the reducer already appended the new user turn
    let messages = app.chat.transcript.messages();
    let history: Vec<ChatMessage> =
        messages[..messages.len().saturating_sub(1)].to_vec();

    tokio::spawn(async move {
        let request = ReplyRequest {
            history: &history,
            message: &message,
            model: &model,
        };
        let text = match client.reply(request).await {
            Ok(text) => text,
            Err(e) => {
                // Every failure collapses to the same apology; the detail
                // only reaches the log
                warn!("Assistant call failed: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };
        if tx.send(Action::ReplyReceived(text)).is_err() {
            warn!("Failed to deliver assistant reply: receiver dropped");
        }
    });
}
