use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::assistant::{ChatMessage, Role};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// One transcript turn rendered as a rounded, role-styled block.
///
/// `Bubble` is a transient component: created fresh each frame by the chat
/// panel, which positions user turns flush right and model turns flush left.
#[derive(Clone, Copy)]
pub struct Bubble<'a> {
    pub message: &'a ChatMessage,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a ChatMessage) -> Self {
        Self { message }
    }

    fn role_label(role: Role) -> &'static str {
        match role {
            Role::User => "you",
            Role::Model => "assistant",
        }
    }

    fn role_style(role: Role) -> Style {
        match role {
            Role::User => Style::default().fg(Color::Cyan),
            Role::Model => Style::default().fg(Color::Blue),
        }
    }

    /// Predict the rendered height for a given width without rendering.
    ///
    /// Uses `textwrap` with options matching Ratatui's `Paragraph` wrapping,
    /// so the chat panel can lay out its scroll view ahead of time.
    pub fn calculate_height(message: &ChatMessage, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for borders + padding; still occupy a row.
            return 1;
        }

        let content = message.text.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }
}

impl<'a> Widget for Bubble<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = Self::role_style(self.message.role);
        let border_style = style.add_modifier(Modifier::DIM);

        let block = Block::bordered()
            .title(Self::role_label(self.message.role))
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let paragraph = Paragraph::new(self.message.text.trim())
            .style(style)
            .wrap(Wrap { trim: true });
        paragraph.render(inner_area, buf);
    }
}
