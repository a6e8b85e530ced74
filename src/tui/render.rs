//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::{AppState, PopupState};
use super::widgets::{
    render_footer, render_header, render_help, render_history, render_quit_confirm,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // History table
        Constraint::Length(1), // Pager / search input
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_history(frame, chunks[1], state);
    render_footer(frame, chunks[2], state);

    // Popups (rendered last to overlay everything).
    match state.popup {
        PopupState::Help { ref mut scroll } => render_help(frame, area, scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::None => {}
    }
}
