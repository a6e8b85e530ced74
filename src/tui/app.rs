//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::warn;

use crate::model::HistoryField;
use crate::provider::HistorySource;
use crate::table::ViewState;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Loads history from `source` and prepares the view.
    ///
    /// A failed load does not abort: the view starts in its loading state.
    pub fn new(mut source: Box<dyn HistorySource>, view: ViewState<HistoryField>) -> Self {
        let mut state = AppState::with_view(source.name(), view);
        match source.load() {
            Ok(records) => state.set_records(records),
            Err(e) => {
                if !e.is_malformed() {
                    warn!(source = source.name(), error = %e, "history unavailable");
                }
                state.load_failed(&e);
            }
        }
        Self {
            state,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        let result = self.event_loop(&mut terminal, &events);

        // Restore terminal even when drawing failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &EventHandler,
    ) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => self.state.tick(),
                Ok(Event::Key(key)) => {
                    if handle_key(&mut self.state, key) == KeyAction::Quit {
                        self.should_quit = true;
                    }
                }
                Ok(Event::Resize) => {}
                Err(_) => self.should_quit = true,
            }
        }
        Ok(())
    }
}
