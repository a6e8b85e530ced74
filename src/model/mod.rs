//! Domain types shared by the client, the history view and the reports.

mod history;
mod prediction;

pub use history::{Accuracy, HistoryField, HistoryRecord, PropertyType};
pub use prediction::{
    MarketComparison, MonthlyTrend, PredictionInput, PredictionResult, ValidationError,
};
