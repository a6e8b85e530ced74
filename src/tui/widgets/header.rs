//! Header widget showing title, source, record counts and status.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(22), // Title
        Constraint::Min(20),    // Source and counts
        Constraint::Length(48), // Status
    ])
    .split(area);

    let title = Paragraph::new(" Prediction History ").style(Styles::header());
    frame.render_widget(title, chunks[0]);

    let counts = if state.is_loading() {
        "loading".to_string()
    } else {
        let filtered = state.derived().filtered_count;
        if state.view.search_term.is_empty() {
            format!("{} records", filtered)
        } else {
            format!("{} of {} records", filtered, state.records.len())
        }
    };
    let mut spans = vec![
        Span::styled(format!("[{}] ", state.source), Styles::header()),
        Span::styled(counts, Styles::header()),
    ];
    if !state.view.search_term.is_empty() {
        spans.push(Span::styled(
            format!("  search: {}", state.view.search_term),
            Styles::header(),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::header()),
        chunks[1],
    );

    let status = match &state.status_message {
        Some(msg) => Paragraph::new(format!("{} ", msg)).style(Styles::error()),
        None => Paragraph::new("? help ").style(Styles::header()),
    };
    frame.render_widget(status.alignment(Alignment::Right), chunks[2]);
}
