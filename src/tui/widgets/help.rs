//! Help popup widget with keybindings and column descriptions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;
use crate::view::history::COLUMNS;

const KEYS: &[(&str, &str)] = &[
    ("/", "Search (type, Enter keep, Esc clear)"),
    ("→ l PgDn", "Next page"),
    ("← h PgUp", "Previous page"),
    ("Home g", "First page"),
    ("End G", "Last page"),
    ("↑ k / ↓ j", "Select row"),
    ("?", "Toggle this help"),
    ("q", "Quit (asks for confirmation)"),
    ("Ctrl-C", "Quit immediately"),
];

const NOTES: &[&str] = &[
    "Search matches the property type (any case), the date,",
    "the size and the predicted price.",
    "Status: Accurate when the actual price is within 5%",
    "of the prediction, otherwise Off by the difference.",
];

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Navigation", Styles::section_header()))];
    for (key, desc) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), Styles::help_key()),
            Span::raw(*desc),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Sort (press again to reverse)",
        Styles::section_header(),
    )));
    for column in COLUMNS {
        if let Some(key) = column.key {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", key), Styles::help_key()),
                Span::raw(column.header),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.extend(NOTES.iter().map(|n| Line::from(Span::styled(*n, Styles::help()))));
    lines
}

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 72).min(area.width);
    let popup_height = (area.height * 80 / 100).clamp(10, 30).min(area.height);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let content = help_lines();
    let content_lines = content.len();

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    // Clamp scroll to valid range
    let max_scroll = content_lines.saturating_sub(chunks[0].height as usize);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Line::from(vec![
        Span::styled("Esc", Styles::help_key()),
        Span::styled(" close  ", Styles::help()),
        Span::styled("↑/↓", Styles::help_key()),
        Span::styled(" scroll", Styles::help()),
        Span::styled(scroll_info, Styles::help()),
    ]);
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_sort_hotkey() {
        let text: Vec<String> = help_lines().iter().map(|l| l.to_string()).collect();
        for key in ['d', 't', 's', 'b', 'a', 'p', 'c'] {
            assert!(
                text.iter().any(|l| l.trim_start().starts_with(key)),
                "missing {key}"
            );
        }
    }
}
