use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::content;

pub fn text() -> Text<'static> {
    let profile = content::profile();

    let lines = vec![
        Line::raw(""),
        Line::styled(
            format!("◆ {}", profile.availability),
            Style::default().fg(Color::Magenta),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Hi, I'm "),
            Span::styled(
                profile.name,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(profile.tagline, Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::raw(profile.bio),
        Line::raw(""),
        Line::from(vec![
            Span::styled("✉ ", Style::default().fg(Color::Yellow)),
            Span::raw(profile.email),
        ]),
        Line::from(vec![
            Span::styled("⌂ ", Style::default().fg(Color::Yellow)),
            Span::raw(profile.github),
        ]),
        Line::from(vec![
            Span::styled("in ", Style::default().fg(Color::Yellow)),
            Span::raw(profile.linkedin),
        ]),
    ];

    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_includes_contact_links() {
        let rendered = text().to_string();
        let profile = content::profile();
        assert!(rendered.contains(profile.email));
        assert!(rendered.contains(profile.github));
        assert!(rendered.contains(profile.linkedin));
    }
}
