//! Application state management.

use ratatui::widgets::TableState as RatatuiTableState;
use tracing::debug;

use crate::model::{HistoryField, HistoryRecord};
use crate::provider::ProviderError;
use crate::table::{self, DerivedView, SortDirection, ViewState};

/// Number of ticks a status message stays visible.
pub const STATUS_TICKS: u8 = 20;

/// Input mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a search term (`/`).
    Search,
}

/// Whether history has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
}

/// Active popup. Only one popup can be open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    Help {
        scroll: usize,
    },
    QuitConfirm,
}

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// Name of the history source shown in the header.
    pub source: String,
    pub records: Vec<HistoryRecord>,
    pub load: LoadState,
    /// Search, sort and page.
    pub view: ViewState<HistoryField>,
    pub input_mode: InputMode,
    /// Search input buffer.
    pub search_input: String,
    /// Selected row within the current page.
    pub selected: usize,
    pub popup: PopupState,
    /// Temporary status message shown in the header (e.g. a failed fetch).
    pub status_message: Option<String>,
    status_ticks: u8,
    pub ratatui_state: RatatuiTableState,
}

impl AppState {
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_view(
            source,
            ViewState::new(HistoryField::Date, SortDirection::Descending),
        )
    }

    pub fn with_view(source: impl Into<String>, view: ViewState<HistoryField>) -> Self {
        Self {
            source: source.into(),
            records: Vec::new(),
            load: LoadState::Loading,
            view,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            selected: 0,
            popup: PopupState::None,
            status_message: None,
            status_ticks: 0,
            ratatui_state: RatatuiTableState::default(),
        }
    }

    /// Installs a freshly loaded record set.
    pub fn set_records(&mut self, records: Vec<HistoryRecord>) {
        self.records = records;
        self.load = LoadState::Ready;
        let term = self.view.search_term.clone();
        self.view.set_search_term(term, &self.records);
        self.clamp_selection();
    }

    /// Records a failed load. The view stays in [`LoadState::Loading`].
    pub fn load_failed(&mut self, err: &ProviderError) {
        if err.is_malformed() {
            debug!(error = %err, "history payload ignored");
            return;
        }
        self.set_status(err.to_string());
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Current page of the table.
    pub fn derived(&self) -> DerivedView<'_, HistoryRecord> {
        table::render(&self.records, &self.view)
    }

    pub fn total_pages(&self) -> usize {
        let count = table::filter_records(&self.records, &self.view.search_term).len();
        table::total_pages(count, self.view.page_size)
    }

    pub fn visible_len(&self) -> usize {
        self.derived().visible.len()
    }

    /// Replaces the search term from the input buffer.
    pub fn apply_search_input(&mut self) {
        let term = self.search_input.clone();
        self.view.set_search_term(term, &self.records);
        self.selected = 0;
    }

    pub fn toggle_sort(&mut self, field: HistoryField) {
        self.view.toggle_sort(field);
        self.selected = 0;
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.view.next_page(total);
        self.selected = 0;
    }

    pub fn prev_page(&mut self) {
        self.view.prev_page();
        self.selected = 0;
    }

    pub fn first_page(&mut self) {
        self.view.first_page();
        self.selected = 0;
    }

    pub fn last_page(&mut self) {
        let total = self.total_pages();
        self.view.last_page(total);
        self.selected = 0;
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible_len().saturating_sub(1));
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    /// Ages the status message; it disappears after [`STATUS_TICKS`] ticks.
    pub fn tick(&mut self) {
        if self.status_message.is_none() {
            return;
        }
        self.status_ticks = self.status_ticks.saturating_sub(1);
        if self.status_ticks == 0 {
            self.status_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::provider::sample_records;
    use reqwest::StatusCode;

    fn ready() -> AppState {
        let mut state = AppState::new("sample");
        state.set_records(sample_records());
        state
    }

    #[test]
    fn new_state_waits_for_history() {
        let state = AppState::new("remote");
        assert!(state.is_loading());
        assert_eq!(state.view.sort_field, HistoryField::Date);
        assert_eq!(state.view.sort_direction, SortDirection::Descending);
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn http_failure_shows_status_and_keeps_loading() {
        let mut state = AppState::new("remote");
        let err = ProviderError::Client(ClientError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "Failed to fetch historical data".to_string(),
        });
        state.load_failed(&err);
        assert!(state.is_loading());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Failed to fetch historical data")
        );
    }

    #[test]
    fn malformed_payload_keeps_loading_silently() {
        let mut state = AppState::new("remote");
        let source = serde_json::from_str::<Vec<HistoryRecord>>("{}").unwrap_err();
        let err = ProviderError::Client(ClientError::Decode {
            url: "http://localhost:8000/historical-data".to_string(),
            source,
        });
        state.load_failed(&err);
        assert!(state.is_loading());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn status_message_expires_after_ticks() {
        let mut state = ready();
        state.set_status("boom");
        for _ in 0..STATUS_TICKS - 1 {
            state.tick();
        }
        assert!(state.status_message.is_some());
        state.tick();
        assert!(state.status_message.is_none());
    }

    #[test]
    fn selection_stays_within_page() {
        let mut state = ready();
        for _ in 0..20 {
            state.select_down();
        }
        assert_eq!(state.selected, 9);
        state.last_page();
        assert_eq!(state.view.current_page, 3);
        assert_eq!(state.selected, 0);
        for _ in 0..20 {
            state.select_down();
        }
        assert_eq!(state.selected, 4);
    }

    #[test]
    fn page_navigation_is_clamped() {
        let mut state = ready();
        state.prev_page();
        assert_eq!(state.view.current_page, 1);
        for _ in 0..5 {
            state.next_page();
        }
        assert_eq!(state.view.current_page, 3);
        state.first_page();
        assert_eq!(state.view.current_page, 1);
    }
}
