//! History table widget.
//! Thin TUI wrapper over [`crate::view::history::build_history_view`].

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table};

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::Align;
use crate::view::history::build_history_view;

const LOADING: &str = "Loading history...";
const NO_MATCHES: &str = "No matching records";

fn message(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .style(Styles::default());
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn aligned(text: String, align: Align) -> Line<'static> {
    let line = Line::from(text);
    match align {
        Align::Left => line,
        Align::Right => line.alignment(Alignment::Right),
    }
}

pub fn render_history(frame: &mut Frame, area: Rect, state: &mut AppState) {
    if state.is_loading() {
        message(frame, area, "Prediction History", LOADING);
        return;
    }

    let derived = state.derived();
    let vm = build_history_view(&derived, &state.view);
    if vm.rows.is_empty() {
        message(frame, area, &vm.title, NO_MATCHES);
        return;
    }

    // Header with sort indicator
    let headers: Vec<Line> = vm
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let (text, style) = if Some(i) == vm.sort_column {
                (format!("{}{}", h, vm.sort_direction.arrow()), Styles::sort_header())
            } else {
                (h.clone(), Styles::table_header())
            };
            let align = vm.aligns.get(i).copied().unwrap_or_default();
            aligned(text, align).style(style)
        })
        .collect();
    let header = Row::new(headers).style(Styles::table_header()).height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|vr| {
            let cells: Vec<Line> = vr
                .cells
                .iter()
                .zip(&vm.aligns)
                .map(|(c, align)| {
                    let line = aligned(c.text.clone(), *align);
                    match c.style {
                        Some(s) => line.style(Styles::from_class(s)),
                        None => line,
                    }
                })
                .collect();
            Row::new(cells).style(Styles::from_class(vr.style)).height(1)
        })
        .collect();

    let constraints: Vec<Constraint> = vm
        .widths
        .iter()
        .map(|&w| Constraint::Length(w + 1))
        .collect();

    let table = Table::new(rows, constraints)
        .header(header)
        .block(
            Block::default()
                .title(Line::from(vec![Span::raw(format!(" {} ", vm.title))]))
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    let selected = state.selected.min(vm.rows.len().saturating_sub(1));
    state.ratatui_state.select(Some(selected));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(table, area, &mut state.ratatui_state);
}
