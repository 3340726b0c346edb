use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::content::{self, Icon};

/// Resolve an icon selector to its glyph. The enumeration is closed, so the
/// mapping is total.
fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Terminal => ">_",
        Icon::Cpu => "[#]",
        Icon::LayoutGrid => "[+]",
        Icon::Tool => "[*]",
    }
}

fn icon_color(icon: Icon) -> Color {
    match icon {
        Icon::Terminal => Color::Cyan,
        Icon::Cpu => Color::Green,
        Icon::LayoutGrid => Color::Magenta,
        Icon::Tool => Color::Yellow,
    }
}

pub fn text() -> Text<'static> {
    let mut lines: Vec<Line<'static>> = vec![
        Line::raw(""),
        Line::raw("Core expertise across languages, embedded systems, and development tools."),
    ];

    for category in content::skill_categories() {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled(
                icon_glyph(category.icon),
                Style::default()
                    .fg(icon_color(category.icon))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(category.name, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::styled(
            format!("   {}", category.skills.join(" · ")),
            Style::default().fg(Color::Gray),
        ));
    }

    Text::from(lines)
}
