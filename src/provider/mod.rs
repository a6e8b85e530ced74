//! Provider abstraction for history data sources.
//!
//! The history view works with any `HistorySource`:
//! - `SampleSource`: the built-in demonstration data set
//! - `RemoteSource`: records fetched from the prediction service

mod remote;
mod sample;

pub use remote::RemoteSource;
pub use sample::{SampleSource, sample_records};

use thiserror::Error;

use crate::client::ClientError;
use crate::model::HistoryRecord;

/// Error types that can occur while loading history.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ProviderError {
    /// True when the data arrived but could not be parsed.
    pub fn is_malformed(&self) -> bool {
        match self {
            ProviderError::Client(e) => e.is_decode(),
        }
    }
}

/// Abstraction for history data sources.
///
/// The trait is object-safe and designed to be used with `Box<dyn HistorySource>`.
pub trait HistorySource {
    /// Short name shown in the view header.
    fn name(&self) -> &str;

    /// Loads the complete record set.
    fn load(&mut self) -> Result<Vec<HistoryRecord>, ProviderError>;
}
