//! History fetched from the prediction service.

use tracing::info;

use crate::client::PredictionClient;
use crate::model::HistoryRecord;

use super::{HistorySource, ProviderError};

/// Source backed by `GET /historical-data`.
pub struct RemoteSource {
    client: PredictionClient,
}

impl RemoteSource {
    pub fn new(client: PredictionClient) -> Self {
        Self { client }
    }
}

impl HistorySource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    fn load(&mut self) -> Result<Vec<HistoryRecord>, ProviderError> {
        let records = self.client.historical_data()?;
        info!(
            count = records.len(),
            url = %self.client.config().base_url,
            "loaded history from service"
        );
        Ok(records)
    }
}
