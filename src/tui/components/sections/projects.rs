use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::content;

fn tag_line(prefix: &'static str, tags: &'static [&'static str]) -> Line<'static> {
    let mut spans = vec![Span::styled(prefix, Style::default().fg(Color::DarkGray))];
    for tag in tags {
        spans.push(Span::styled(
            format!("[{tag}] "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

pub fn text() -> Text<'static> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line<'static>> = vec![Line::raw("")];

    for (i, project) in content::projects().iter().enumerate() {
        if i > 0 {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "─".repeat(48),
                Style::default().fg(Color::DarkGray),
            ));
            lines.push(Line::raw(""));
        }

        lines.push(Line::styled(
            project.subtitle.to_uppercase(),
            Style::default().fg(Color::Magenta),
        ));
        lines.push(Line::styled(
            project.title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        lines.push(tag_line("tech: ", project.tech));
        lines.push(Line::raw(""));
        lines.push(Line::raw(project.description));
        lines.push(Line::from(vec![
            Span::styled("Goal: ", bold),
            Span::raw(project.goal),
        ]));
        lines.push(Line::raw(""));

        lines.push(Line::styled("Implementation", bold));
        for item in project.implementation {
            lines.push(Line::from(vec![
                Span::styled("  ▸ ", Style::default().fg(Color::Cyan)),
                Span::raw(*item),
            ]));
        }
        lines.push(Line::raw(""));

        lines.push(Line::styled("Skills demonstrated", bold));
        for item in project.skills {
            lines.push(Line::from(vec![
                Span::styled("  ▸ ", Style::default().fg(Color::Cyan)),
                Span::raw(*item),
            ]));
        }
        lines.push(Line::raw(""));

        lines.push(Line::styled("Results", bold));
        lines.push(Line::styled(
            format!("  \"{}\"", project.results),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
        lines.push(Line::from(vec![
            Span::styled("  image: ", Style::default().fg(Color::DarkGray)),
            Span::styled(project.image, Style::default().fg(Color::DarkGray)),
        ]));
    }

    Text::from(lines)
}
