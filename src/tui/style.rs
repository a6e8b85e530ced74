//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::RowStyleClass;

/// Color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    pub const ACCURATE: Color = Color::Green;
    pub const OFF: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const ACCENT: Color = Color::Cyan;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active sort column header.
    pub fn sort_header() -> Style {
        Self::table_header().fg(Theme::ACCENT)
    }

    /// Status message (e.g. a failed fetch).
    pub fn error() -> Style {
        Style::default()
            .fg(Theme::ERROR)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Search input style.
    pub fn search_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Popup border.
    pub fn popup_border() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    pub fn section_header() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Maps a UI-agnostic [`RowStyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: RowStyleClass) -> Style {
        match class {
            RowStyleClass::Normal => Self::default(),
            RowStyleClass::Warning => Style::default().fg(Theme::OFF),
            RowStyleClass::Active => Style::default().fg(Theme::ACCURATE),
        }
    }
}
