//! Prediction history view model.

use crate::fmt::{format_percent, format_price, format_sqft};
use crate::model::{Accuracy, HistoryField, HistoryRecord};
use crate::table::{DerivedView, ViewState};
use crate::view::{Align, RowStyleClass, TableViewModel, ViewCell, ViewRow};

/// A displayed column of the history table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryColumn {
    pub header: &'static str,
    /// Sort field; `None` for derived columns.
    pub field: Option<HistoryField>,
    /// Hotkey selecting this column for sorting.
    pub key: Option<char>,
    pub width: u16,
    pub align: Align,
}

const fn column(
    header: &'static str,
    field: Option<HistoryField>,
    key: Option<char>,
    width: u16,
    align: Align,
) -> HistoryColumn {
    HistoryColumn {
        header,
        field,
        key,
        width,
        align,
    }
}

pub const COLUMNS: &[HistoryColumn] = &[
    column("Date", Some(HistoryField::Date), Some('d'), 10, Align::Left),
    column("Type", Some(HistoryField::PropertyType), Some('t'), 13, Align::Left),
    column("Size", Some(HistoryField::Sqft), Some('s'), 11, Align::Right),
    column("Beds", Some(HistoryField::Bedrooms), Some('b'), 5, Align::Right),
    column("Baths", Some(HistoryField::Bathrooms), Some('a'), 5, Align::Right),
    column("Predicted", Some(HistoryField::PredictedPrice), Some('p'), 12, Align::Right),
    column("Actual", Some(HistoryField::ActualPrice), Some('c'), 12, Align::Right),
    column("Status", None, None, 18, Align::Left),
];

/// Sort field bound to a hotkey, if any.
pub fn field_for_key(key: char) -> Option<HistoryField> {
    COLUMNS
        .iter()
        .find(|c| c.key == Some(key))
        .and_then(|c| c.field)
}

/// `Accurate (4.0%)` or `Off by -6.2%`.
pub fn status_text(accuracy: Accuracy) -> String {
    match accuracy {
        Accuracy::Accurate(p) => format!("Accurate ({})", format_percent(p)),
        Accuracy::Off(p) => format!("Off by {}", format_percent(p)),
    }
}

/// Upper-cases the first letter of every word: `single family` → `Single Family`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for ch in s.chars() {
        if word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        word_start = ch.is_whitespace();
    }
    out
}

/// Display cells of one record, in [`COLUMNS`] order.
pub fn history_cells(record: &HistoryRecord) -> Vec<ViewCell> {
    let accuracy = record.accuracy();
    let status_style = if accuracy.is_accurate() {
        RowStyleClass::Active
    } else {
        RowStyleClass::Warning
    };
    vec![
        ViewCell::plain(record.date.to_string()),
        ViewCell::plain(title_case(&record.property_type.label())),
        ViewCell::plain(format_sqft(record.sqft)),
        ViewCell::plain(record.bedrooms.to_string()),
        ViewCell::plain(record.bathrooms.to_string()),
        ViewCell::plain(format_price(record.predicted_price)),
        ViewCell::plain(format_price(record.actual_price)),
        ViewCell::styled(status_text(accuracy), status_style),
    ]
}

/// Builds a UI-agnostic view model for one page of history.
pub fn build_history_view(
    view: &DerivedView<'_, HistoryRecord>,
    state: &ViewState<HistoryField>,
) -> TableViewModel<u32> {
    let rows = view
        .visible
        .iter()
        .map(|r| ViewRow {
            id: r.id,
            cells: history_cells(r),
            style: RowStyleClass::Normal,
        })
        .collect();

    let search_info = if state.search_term.is_empty() {
        String::new()
    } else {
        format!(" [search: {}]", state.search_term)
    };

    TableViewModel {
        title: format!(
            "Prediction History ({} records){}",
            view.filtered_count, search_info
        ),
        headers: COLUMNS.iter().map(|c| c.header.to_string()).collect(),
        widths: COLUMNS.iter().map(|c| c.width).collect(),
        aligns: COLUMNS.iter().map(|c| c.align).collect(),
        rows,
        sort_column: COLUMNS
            .iter()
            .position(|c| c.field == Some(state.sort_field)),
        sort_direction: state.sort_direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::sample_records;
    use crate::table::{SortDirection, render};

    #[test]
    fn hotkeys_map_to_sortable_columns() {
        assert_eq!(field_for_key('d'), Some(HistoryField::Date));
        assert_eq!(field_for_key('a'), Some(HistoryField::Bathrooms));
        assert_eq!(field_for_key('c'), Some(HistoryField::ActualPrice));
        assert_eq!(field_for_key('x'), None);
    }

    #[test]
    fn status_text_shows_signed_percent() {
        assert_eq!(status_text(Accuracy::Accurate(-1.4)), "Accurate (-1.4%)");
        assert_eq!(status_text(Accuracy::Off(10.0)), "Off by 10.0%");
    }

    #[test]
    fn property_type_is_title_cased() {
        assert_eq!(title_case("single family"), "Single Family");
        assert_eq!(title_case("multi family"), "Multi Family");
        assert_eq!(title_case("condo"), "Condo");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn cells_follow_column_order() {
        let records = sample_records();
        let cells = history_cells(&records[0]);
        let text: Vec<&str> = cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            text,
            vec![
                "2023-10-15",
                "Single Family",
                "1,800 sqft",
                "2",
                "1.5",
                "$350,000",
                "$345,000",
                "Accurate (-1.4%)",
            ]
        );
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[7].style, Some(RowStyleClass::Active));
    }

    #[test]
    fn view_marks_sorted_column_and_search() {
        let records = sample_records();
        let mut state = ViewState::new(HistoryField::Sqft, SortDirection::Descending);
        state.set_search_term("condo", &records);
        let derived = render(&records, &state);
        let vm = build_history_view(&derived, &state);
        assert_eq!(vm.sort_column, Some(2));
        assert_eq!(vm.sort_direction, SortDirection::Descending);
        assert_eq!(vm.rows.len(), 5);
        assert_eq!(vm.title, "Prediction History (5 records) [search: condo]");

        let hidden = ViewState::new(HistoryField::CrimeRate, SortDirection::Ascending);
        let vm = build_history_view(&render(&records, &hidden), &hidden);
        assert_eq!(vm.sort_column, None);
    }
}
