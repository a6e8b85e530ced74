//! UI-agnostic view models.
//!
//! These types represent presentation data without any dependency on a specific
//! rendering framework. The TUI maps them to ratatui styles; the plain-text
//! report lays them out in fixed-width columns.

pub mod history;

use crate::table::SortDirection;

/// Row-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Warning level (TUI: yellow). E.g. a prediction off by 5% or more.
    Warning,
    /// Positive (TUI: green). E.g. an accurate prediction.
    Active,
}

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

/// One table row, parameterized by entity ID type.
#[derive(Debug, Clone)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone)]
pub struct TableViewModel<Id> {
    pub title: String,
    pub headers: Vec<String>,
    pub widths: Vec<u16>,
    pub aligns: Vec<Align>,
    pub rows: Vec<ViewRow<Id>>,
    /// Index of the sorted column, if it is visible.
    pub sort_column: Option<usize>,
    pub sort_direction: SortDirection,
}
