use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::content;

pub fn text() -> Text<'static> {
    let education = content::education();
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                education.program,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", education.status),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::raw(education.level),
        Line::raw(""),
        Line::raw(education.focus),
        Line::raw(""),
        Line::styled("Key Coursework", bold),
    ];
    for course in education.coursework {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Cyan)),
            Span::raw(*course),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled("Achievements", bold));
    for achievement in education.achievements {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Cyan)),
            Span::raw(*achievement),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled("Certifications", bold));
    for cert in content::certifications() {
        lines.push(Line::from(vec![
            Span::styled("  ★ ", Style::default().fg(Color::Yellow)),
            Span::styled(cert.title, bold),
            Span::styled(
                format!(" · {}", cert.subtitle),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    Text::from(lines)
}
