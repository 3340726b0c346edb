//! # ChatPanel Component
//!
//! The floating assistant widget, drawn over the bottom-right corner of the
//! shell when open.
//!
//! ## Responsibilities
//!
//! - Scrollable transcript of chat bubbles (user flush right, model flush
//!   left), sticking to the bottom as new turns arrive
//! - Greeting plus suggested-prompt shortcuts while the transcript is empty
//! - Spinner line while a reply is outstanding
//! - Hosting the [`ChatInput`] at its foot

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::assistant::{Role, Transcript};
use crate::core::state::SUGGESTED_PROMPTS;
use crate::tui::component::Component;
use crate::tui::components::bubble::Bubble;
use crate::tui::components::chat_input::ChatInput;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Bubbles take most of the row; the rest signals who is speaking by side.
const BUBBLE_WIDTH_PERCENT: u16 = 85;

/// Scroll and layout state for the chat panel.
/// Must be persisted in the parent TuiState.
pub struct ChatPanelState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom as new turns arrive.
    pub stick_to_bottom: bool,
    /// Transcript length at the last render, to detect new turns.
    pub last_turn_count: usize,
    /// Last known viewport height, for clamping between frames.
    pub viewport_height: u16,
    /// Total content height at the last render.
    pub content_height: u16,
}

impl Default for ChatPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatPanelState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true, // Start attached to bottom
            last_turn_count: 0,
            viewport_height: 0,
            content_height: 0,
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.stick_to_bottom = false;
        let current = self.scroll_state.offset();
        self.scroll_state.set_offset(Position {
            x: current.x,
            y: current.y.saturating_sub(lines),
        });
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        let new_y = (current.y + lines).min(max_y);
        self.scroll_state.set_offset(Position {
            x: current.x,
            y: new_y,
        });
        // Scrolling to the very bottom re-engages auto-scroll
        if new_y >= max_y {
            self.stick_to_bottom = true;
        }
    }

    fn scroll_to_bottom(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        self.scroll_state.set_offset(Position { x: 0, y: max_y });
    }
}

/// The floating chat widget. Created fresh each frame with references to
/// persistent state and the core transcript.
pub struct ChatPanel<'a> {
    pub transcript: &'a Transcript,
    pub pending: bool,
    pub spinner_frame: usize,
    pub state: &'a mut ChatPanelState,
    pub input: &'a mut ChatInput,
}

impl<'a> ChatPanel<'a> {
    fn draw_greeting(&self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::raw(""),
            Line::styled("Hi! I'm Lina's AI assistant.", Style::default().fg(Color::White)),
            Line::styled("Ask me anything about her C# Book System", dim),
            Line::styled("or the Smart Home project!", dim),
            Line::raw(""),
        ];
        for (i, prompt) in SUGGESTED_PROMPTS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!(" Alt+{} ", i + 1), Style::default().fg(Color::Magenta)),
                Span::styled(*prompt, Style::default().fg(Color::White)),
            ]));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_transcript(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let bubble_width = (content_width * BUBBLE_WIDTH_PERCENT / 100).max(8);

        let heights: Vec<u16> = self
            .transcript
            .messages()
            .iter()
            .map(|m| Bubble::calculate_height(m, bubble_width))
            .collect();
        let typing_height: u16 = if self.pending { 1 } else { 0 };
        let total_height: u16 = heights.iter().sum::<u16>() + typing_height;

        self.state.viewport_height = area.height;
        self.state.content_height = total_height;

        // New turn (or the typing line appearing) while pinned: follow it
        let turn_count = self.transcript.len() + typing_height as usize;
        if turn_count != self.state.last_turn_count {
            self.state.last_turn_count = turn_count;
            if self.state.stick_to_bottom {
                self.state.scroll_to_bottom();
            }
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (message, height) in self.transcript.messages().iter().zip(&heights) {
            let x = match message.role {
                Role::User => content_width.saturating_sub(bubble_width),
                Role::Model => 0,
            };
            let rect = Rect::new(x, y_offset, bubble_width, *height);
            scroll_view.render_widget(Bubble::new(message), rect);
            y_offset += height;
        }

        if self.pending {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            let indicator = Paragraph::new(format!("{spinner} thinking..."))
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
            scroll_view.render_widget(indicator, Rect::new(0, y_offset, content_width, 1));
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl<'a> Component for ChatPanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // The panel floats above the shell
        frame.render_widget(Clear, area);

        let title = Line::from(vec![
            Span::styled(" Lina's Assistant ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("● online ", Style::default().fg(Color::Green)),
        ]);
        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title(title)
            .title_bottom(
                Line::styled(" Esc closes ", Style::default().fg(Color::DarkGray))
                    .right_aligned(),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body_area, input_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(inner);

        if self.transcript.is_empty() && !self.pending {
            self.draw_greeting(frame, body_area);
        } else {
            self.draw_transcript(frame, body_area);
        }

        self.input.render(frame, input_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::Transcript;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_panel(transcript: &Transcript, pending: bool) -> (String, ChatPanelState) {
        let backend = TestBackend::new(48, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ChatPanelState::new();
        let mut input = ChatInput::new();

        terminal
            .draw(|f| {
                let mut panel = ChatPanel {
                    transcript,
                    pending,
                    spinner_frame: 0,
                    state: &mut state,
                    input: &mut input,
                };
                panel.render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        (text, state)
    }

    #[test]
    fn test_empty_transcript_shows_suggested_prompts() {
        let (text, _) = render_panel(&Transcript::new(), false);
        assert!(text.contains("Lina's Assistant"));
        assert!(text.contains("Alt+1"));
        assert!(text.contains("Skills?"));
    }

    #[test]
    fn test_turns_render_with_role_labels() {
        let mut transcript = Transcript::new();
        transcript.push_user("Skills?");
        transcript.push_model("C++, C#, and IoT.");

        let (text, _) = render_panel(&transcript, false);
        assert!(text.contains("you"));
        assert!(text.contains("assistant"));
        assert!(text.contains("Skills?"));
        assert!(text.contains("C++, C#, and IoT."));
    }

    #[test]
    fn test_pending_shows_typing_indicator() {
        let mut transcript = Transcript::new();
        transcript.push_user("Skills?");

        let (text, _) = render_panel(&transcript, true);
        assert!(text.contains("thinking..."));
    }

    #[test]
    fn test_sticks_to_bottom_when_transcript_overflows() {
        let mut transcript = Transcript::new();
        for i in 0..10 {
            transcript.push_user(format!("question {i}"));
            transcript.push_model(format!("answer {i}"));
        }

        let (_, state) = render_panel(&transcript, false);
        let expected = state.content_height.saturating_sub(state.viewport_height);
        assert!(expected > 0, "transcript should overflow the viewport");
        assert_eq!(state.scroll_state.offset().y, expected);
    }

    #[test]
    fn test_manual_scroll_releases_and_repins() {
        let mut state = ChatPanelState::new();
        state.viewport_height = 10;
        state.content_height = 30;
        state.scroll_state.set_offset(Position { x: 0, y: 20 });

        state.scroll_up(2);
        assert!(!state.stick_to_bottom);
        assert_eq!(state.scroll_state.offset().y, 18);

        state.scroll_down(2);
        assert_eq!(state.scroll_state.offset().y, 20);
        assert!(state.stick_to_bottom, "reaching the bottom re-pins");
    }
}
