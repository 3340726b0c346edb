//! # Footer Component
//!
//! Bottom status line: key hints for the current mode, the status message,
//! and which model backs the assistant. Stateless: everything arrives as
//! props from `App` and the TUI layer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct Footer {
    pub status_message: String,
    pub model_name: String,
    pub chat_open: bool,
    pub pending: bool,
}

impl Footer {
    fn hints(&self) -> &'static str {
        if self.chat_open {
            "Enter send · Esc close · Tab sections · ↑↓ scroll"
        } else {
            "q quit · c chat · Tab/1-4 sections · ↑↓ scroll"
        }
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = if self.pending {
            format!(
                "{} | waiting for {}...",
                self.hints(),
                self.model_name
            )
        } else if self.status_message.is_empty() {
            format!("{} | {}", self.hints(), self.model_name)
        } else {
            format!("{} | {}", self.hints(), self.status_message)
        };

        frame.render_widget(
            Span::styled(text, Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
