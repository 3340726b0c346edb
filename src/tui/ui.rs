//! Frame composition: nav bar on top, the active section in the middle,
//! key hints at the bottom, and the chat panel floating over the
//! bottom-right corner when open.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ChatPanel, Footer, NavBar, sections};

/// Widest the floating chat panel gets, borders included.
const CHAT_PANEL_WIDTH: u16 = 48;
/// Tallest the floating chat panel gets, borders included.
const CHAT_PANEL_HEIGHT: u16 = 20;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(3), Min(0), Length(1)]);
    let [nav_area, content_area, footer_area] = layout.areas(frame.area());

    NavBar { section: app.section }.render(frame, nav_area);

    sections::render(frame, content_area, app.section, &mut tui.section_scroll);

    Footer {
        status_message: app.status_message.clone(),
        model_name: app.model_name.clone(),
        chat_open: app.chat.open,
        pending: app.chat.pending,
    }
    .render(frame, footer_area);

    if app.chat.open {
        let panel_area = chat_overlay_rect(frame.area());
        ChatPanel {
            transcript: &app.chat.transcript,
            pending: app.chat.pending,
            spinner_frame,
            state: &mut tui.chat_panel,
            input: &mut tui.chat_input,
        }
        .render(frame, panel_area);
    }
}

/// The floating chat panel's rectangle: anchored to the bottom-right, one
/// row above the footer, shrinking with the terminal.
pub fn chat_overlay_rect(area: Rect) -> Rect {
    let width = CHAT_PANEL_WIDTH.min(area.width.saturating_sub(2));
    let height = CHAT_PANEL_HEIGHT.min(area.height.saturating_sub(2));
    Rect::new(
        area.width.saturating_sub(width + 1),
        area.height.saturating_sub(height + 1),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::state::Section;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_shell_renders_every_section() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        // Property: what's on screen tracks the selected section's data
        let signatures = [
            (Section::About, "Available for Internships"),
            (Section::Projects, "Object-Oriented"),
            (Section::Skills, "Programming"),
            (Section::Education, "Coursework"),
        ];
        for (section, signature) in signatures {
            update(&mut app, Action::SelectSection(section));
            let text = draw(&app, &mut tui);
            assert!(text.contains(signature), "{section:?}: missing {signature}");
        }
    }

    #[test]
    fn test_chat_overlay_appears_when_open() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        let text = draw(&app, &mut tui);
        assert!(!text.contains("Lina's Assistant"));

        update(&mut app, Action::OpenChat);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Lina's Assistant"));
    }

    #[test]
    fn test_overlay_rect_stays_inside_frame() {
        for (w, h) in [(100u16, 30u16), (50, 20), (20, 8), (3, 3)] {
            let frame = Rect::new(0, 0, w, h);
            let rect = chat_overlay_rect(frame);
            assert!(rect.right() <= frame.right(), "{w}x{h}");
            assert!(rect.bottom() <= frame.bottom(), "{w}x{h}");
        }
    }

    #[test]
    fn test_nav_and_footer_frame_the_shell() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        for section in Section::ALL {
            assert!(text.contains(section.title()));
        }
        assert!(text.contains("q quit"));
    }
}
