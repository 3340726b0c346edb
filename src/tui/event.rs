use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events.
///
/// Translation from crossterm is context-free; the event loop decides what
/// a key means based on whether the chat panel is open.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    /// Ctrl+C: quit regardless of mode.
    ForceQuit,
    /// Enter.
    Submit,
    Escape,
    InputChar(char),
    /// Alt+digit: suggested-prompt shortcut.
    AltDigit(u8),
    Paste(String), // Bracketed paste
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Tab: next portfolio section.
    NextTab,
    /// Shift+Tab: previous portfolio section.
    PrevTab,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    let Ok(raw) = event::read() else {
        return None;
    };
    match raw {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::ALT, KeyCode::Char(c @ '1'..='9')) => {
                    Some(TuiEvent::AltDigit(c as u8 - b'0'))
                }
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Tab) => Some(TuiEvent::NextTab),
                (_, KeyCode::BackTab) => Some(TuiEvent::PrevTab),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
                (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
