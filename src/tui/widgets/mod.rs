//! TUI widgets.

mod footer;
mod header;
mod help;
mod history;
mod quit_confirm;

pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use history::render_history;
pub use quit_confirm::render_quit_confirm;
