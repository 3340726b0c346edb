//! # ChatInput Component
//!
//! Single-line text input for the chat panel.
//!
//! ## Responsibilities
//!
//! - Capture text input and basic editing (backspace, delete, cursor keys,
//!   paste)
//! - Handle submission (Enter), trimming whitespace and refusing blank text
//! - Horizontal scrolling when the text outgrows the box
//!
//! The buffer is internal state; the parent owns what submission means.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the ChatInput.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatInputEvent {
    /// User submitted non-blank text (Enter pressed). Already trimmed.
    Submit(String),
    /// Text content changed.
    Changed,
}

const PLACEHOLDER: &str = "Ask me a question...";

pub struct ChatInput {
    buffer: String,
    /// Byte offset of the cursor within `buffer` (always a char boundary).
    cursor: usize,
}

impl Default for ChatInput {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map(|c| pos + c.len_utf8()).unwrap_or(s.len())
}

impl ChatInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer (suggested-prompt shortcuts) and put the cursor at
    /// the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    /// Take the trimmed buffer for submission. Blank input yields `None` and
    /// is left untouched.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.buffer.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        Some(text.trim().to_string())
    }

    /// Columns the cursor sits at, in display width.
    fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    /// Horizontal scroll so the cursor stays visible in `inner_width` columns.
    fn scroll_offset(&self, inner_width: u16) -> u16 {
        let col = self.cursor_column();
        if col < inner_width {
            0
        } else {
            col + 1 - inner_width
        }
    }

    /// The slice of the buffer visible after horizontal scrolling.
    fn visible_text(&self, inner_width: u16) -> String {
        let skip = self.scroll_offset(inner_width);
        let mut width_seen: u16 = 0;
        self.buffer
            .chars()
            .skip_while(|c| {
                if width_seen < skip {
                    width_seen += c.width().unwrap_or(0) as u16;
                    true
                } else {
                    false
                }
            })
            .collect()
    }
}

impl Component for ChatInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);

        let block = Block::bordered().border_type(ratatui::widgets::BorderType::Rounded);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(self.visible_text(inner_width))
                .style(Style::default().fg(Color::White))
        };
        frame.render_widget(paragraph.block(block), area);

        let cursor_x =
            area.x + 1 + self.cursor_column().saturating_sub(self.scroll_offset(inner_width));
        frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

impl EventHandler for ChatInput {
    type Event = ChatInputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(ChatInputEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                // Single-line input: pasted newlines become spaces
                let flat = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                Some(ChatInputEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(ChatInputEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(ChatInputEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(ChatInputEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(ChatInputEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                ChatInputEvent::Changed
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                ChatInputEvent::Changed
            }),
            TuiEvent::Submit => self.take_submission().map(ChatInputEvent::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_builds_buffer() {
        let mut input = ChatInput::new();
        input.handle_event(&TuiEvent::InputChar('h'));
        input.handle_event(&TuiEvent::InputChar('i'));
        assert_eq!(input.text(), "hi");

        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.text(), "h");
    }

    #[test]
    fn test_submit_trims_and_clears() {
        let mut input = ChatInput::new();
        input.set_text("  Skills?  ");

        let event = input.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(ChatInputEvent::Submit("Skills?".to_string())));
        assert!(input.is_empty());
    }

    #[test]
    fn test_blank_submit_is_refused() {
        let mut input = ChatInput::new();
        input.set_text("   \t ");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        // Blank buffer is left alone, not cleared
        assert_eq!(input.text(), "   \t ");
    }

    #[test]
    fn test_cursor_respects_char_boundaries() {
        let mut input = ChatInput::new();
        input.handle_event(&TuiEvent::InputChar('é'));
        input.handle_event(&TuiEvent::InputChar('!'));
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.text(), "!");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = ChatInput::new();
        input.handle_event(&TuiEvent::Paste("one\ntwo".to_string()));
        assert_eq!(input.text(), "one two");
    }

    #[test]
    fn test_edit_in_the_middle() {
        let mut input = ChatInput::new();
        input.set_text("ab");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(input.text(), "axb");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.text(), "xb");
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = ChatInput::new();

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Ask me a question"));
    }
}
