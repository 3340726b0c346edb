//! # Section Views
//!
//! Pure renderers for the four portfolio tabs. Each submodule turns its
//! slice of the Content Store into styled `Text`; this module wraps the
//! active one in a bordered, scrollable paragraph.
//!
//! Rendering is a total function of (Content Store, active section): there
//! is no per-section state beyond the caller's scroll offset, which is
//! clamped here against the rendered line count.

pub mod about;
pub mod education;
pub mod projects;
pub mod skills;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::Section;

fn section_text(section: Section) -> Text<'static> {
    match section {
        Section::About => about::text(),
        Section::Projects => projects::text(),
        Section::Skills => skills::text(),
        Section::Education => education::text(),
    }
}

/// Draw the active section, clamping `scroll` to the content height.
pub fn render(frame: &mut Frame, area: Rect, section: Section, scroll: &mut u16) {
    let block = Block::bordered()
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
        .title(format!(" {} ", section.title()));
    let inner = block.inner(area);

    let paragraph = Paragraph::new(section_text(section)).wrap(Wrap { trim: false });
    let total = paragraph.line_count(inner.width) as u16;
    let max_scroll = total.saturating_sub(inner.height);
    *scroll = (*scroll).min(max_scroll);

    frame.render_widget(paragraph.block(block).scroll((*scroll, 0)), area);
}
