//! Quit confirmation popup widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

/// Renders a centered quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup_width = (area.width / 2).clamp(36, 56).min(area.width);
    let popup_height = area.height.clamp(3, 7);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Quit ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = vec![
        Line::from("Leave the history view?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" or ", Styles::help()),
            Span::styled("q", Styles::help_key()),
            Span::styled(" → quit   ", Styles::help()),
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" or ", Styles::help()),
            Span::styled("n", Styles::help_key()),
            Span::styled(" → cancel", Styles::help()),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, inner);
}
