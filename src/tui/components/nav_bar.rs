//! # NavBar Component
//!
//! The tab strip across the top of the shell. Purely presentational: it
//! receives the active section as a prop and renders the closed set of
//! section titles, highlighting the active one.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Tabs};

use crate::content;
use crate::core::state::Section;
use crate::tui::component::Component;

pub struct NavBar {
    pub section: Section,
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let profile = content::profile();
        let tabs = Tabs::new(Section::ALL.iter().map(|s| s.title()))
            .select(self.section.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::bordered()
                    .border_type(ratatui::widgets::BorderType::Rounded)
                    .title(format!(" {} · {} ", profile.name, profile.tagline)),
            );
        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_nav(section: Section) -> String {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut nav = NavBar { section };
        terminal.draw(|f| nav.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_all_sections_are_listed() {
        let text = render_nav(Section::About);
        for section in Section::ALL {
            assert!(text.contains(section.title()), "missing {}", section.title());
        }
    }

    #[test]
    fn test_title_shows_profile_name() {
        let text = render_nav(Section::Skills);
        assert!(text.contains("Lina"));
    }
}
