//! Footer widget: pager, or the search prompt while typing.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;

pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match state.input_mode {
        InputMode::Search => Line::from(vec![
            Span::styled("Search: ", Styles::help_key()),
            Span::styled(format!("{}_", state.search_input), Styles::search_input()),
            Span::styled("  Enter keep  Esc clear", Styles::help()),
        ]),
        InputMode::Normal => {
            let derived = state.derived();
            let pager = if state.is_loading() {
                String::new()
            } else {
                format!(
                    "Page {} of {} ({} records)",
                    derived.current_page,
                    derived.total_pages.max(1),
                    derived.filtered_count
                )
            };
            Line::from(vec![
                Span::styled(pager, Styles::default()),
                Span::styled("   ", Styles::help()),
                Span::styled("←/→", Styles::help_key()),
                Span::styled(" page  ", Styles::help()),
                Span::styled("/", Styles::help_key()),
                Span::styled(" search  ", Styles::help()),
                Span::styled("dtsbapc", Styles::help_key()),
                Span::styled(" sort  ", Styles::help()),
                Span::styled("q", Styles::help_key()),
                Span::styled(" quit", Styles::help()),
            ])
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
