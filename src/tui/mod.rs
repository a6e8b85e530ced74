//! Terminal user interface for browsing prediction history.
//!
//! Search, sort and paging over the loaded records, with a help popup and
//! a quit confirmation.

mod app;
mod event;
mod input;
mod render;
pub(crate) mod state;
pub(crate) mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, InputMode, LoadState, PopupState};
