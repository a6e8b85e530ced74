//! Non-interactive output: history pages as plain text and prediction
//! results as text or JSON.

use std::fmt::Write as _;

use crate::fmt::{format_number, format_price, format_price_k};
use crate::model::{HistoryField, HistoryRecord, PredictionResult};
use crate::table::{DerivedView, ViewState};
use crate::view::history::build_history_view;
use crate::view::{Align, TableViewModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{:<width$}", text, width = width),
        Align::Right => format!("{:>width$}", text, width = width),
    }
}

fn render_table<Id>(vm: &TableViewModel<Id>) -> String {
    let headers: Vec<String> = vm
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| match vm.sort_column {
            Some(col) if col == i => format!("{}{}", h, vm.sort_direction.arrow()),
            _ => h.clone(),
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let cells = vm
                .rows
                .iter()
                .filter_map(|r| r.cells.get(i))
                .map(|c| c.text.chars().count());
            cells
                .chain([h.chars().count(), vm.widths.get(i).copied().unwrap_or(0) as usize])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: Vec<&str>| -> String {
        let joined: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let align = vm.aligns.get(i).copied().unwrap_or_default();
                pad(text, widths[i], align)
            })
            .collect();
        joined.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", line(headers.iter().map(String::as_str).collect()));
    for row in &vm.rows {
        let _ = writeln!(
            out,
            "{}",
            line(row.cells.iter().map(|c| c.text.as_str()).collect())
        );
    }
    out
}

/// Renders one page of history as a fixed-width table with a pager footer.
pub fn render_history_page(
    view: &DerivedView<'_, HistoryRecord>,
    state: &ViewState<HistoryField>,
) -> String {
    if view.is_empty() {
        return "No matching records\n".to_string();
    }
    let vm = build_history_view(view, state);
    let mut out = String::new();
    let _ = writeln!(out, "{}", vm.title);
    let _ = writeln!(out);
    out.push_str(&render_table(&vm));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Page {} of {} ({} records)",
        view.current_page, view.total_pages, view.filtered_count
    );
    out
}

fn render_prediction_text(result: &PredictionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Estimated Price: {} ({}% Confidence)",
        format_price(result.predicted_price),
        format_number(result.confidence)
    );
    let _ = writeln!(
        out,
        "Potential Value Increase: +{}%",
        format_number(result.potential_increase)
    );

    let market = &result.historical_comparison;
    let _ = writeln!(out);
    let _ = writeln!(out, "Market Comparison");
    for (label, value) in [
        ("This Property", result.predicted_price),
        ("Average", market.average),
        ("Maximum", market.maximum),
        ("Minimum", market.minimum),
    ] {
        let _ = writeln!(out, "  {:<14}{:>14}", label, format_price(value));
    }

    if !result.monthly_trends.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Price Trends");
        for trend in &result.monthly_trends {
            let _ = writeln!(out, "  {:<14}{:>14}", trend.month, format_price_k(trend.price));
        }
    }

    if !result.recommended_actions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Recommended Actions");
        for action in &result.recommended_actions {
            let _ = writeln!(out, "  - {}", action);
        }
    }
    out
}

/// Renders a prediction result in the requested format.
pub fn render_prediction(
    result: &PredictionResult,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_prediction_text(result)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            Ok(json)
        }
    }
}
