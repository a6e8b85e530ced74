//! Blocking HTTP client for the prediction service.
//!
//! Two endpoints are used: `POST /predict` and `GET /historical-data`.
//! Every call is a single request: no retry, no cancellation.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{HistoryRecord, PredictionInput, PredictionResult};

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const PREDICT_FAILED: &str = "Failed to get prediction";
const HISTORY_FAILED: &str = "Failed to fetch historical data";

/// Connection settings for [`PredictionClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins the base URL and an endpoint path with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success status; carries the server-provided message when present.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl ClientError {
    /// True when the service answered successfully but the payload did not parse.
    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Decode { .. })
    }
}

/// Extracts `detail` from an error body, falling back to `fallback`.
///
/// The service reports errors as `{"detail": "..."}`; validation errors carry
/// a structured `detail`, which is kept as compact JSON.
pub fn error_message(body: &str, fallback: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return fallback.to_string();
    };
    match value.get("detail") {
        Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
        Some(serde_json::Value::Null) | None => fallback.to_string(),
        Some(serde_json::Value::String(_)) => fallback.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Client for the prediction service.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: Client,
    config: ClientConfig,
}

impl PredictionClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("valuator/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submits property details and returns the service's valuation.
    pub fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, ClientError> {
        let url = self.config.endpoint("predict");
        debug!(url = %url, property_type = %input.property_type, sqft = input.sqft, "requesting prediction");
        let response = self
            .http
            .post(&url)
            .json(input)
            .send()
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        read_json(url, response, PREDICT_FAILED, true)
    }

    /// Fetches the full history; filtering and paging happen client-side.
    pub fn historical_data(&self) -> Result<Vec<HistoryRecord>, ClientError> {
        let url = self.config.endpoint("historical-data");
        debug!(url = %url, "fetching historical data");
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        let records: Vec<HistoryRecord> = read_json(url, response, HISTORY_FAILED, false)?;
        debug!(count = records.len(), "historical data loaded");
        Ok(records)
    }
}

fn read_json<T: DeserializeOwned>(
    url: String,
    response: Response,
    fallback: &str,
    use_detail: bool,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().map_err(|source| ClientError::Transport {
        url: url.clone(),
        source,
    })?;

    if !status.is_success() {
        let message = if use_detail {
            error_message(&body, fallback)
        } else {
            fallback.to_string()
        };
        warn!(url = %url, status = status.as_u16(), "{}", message);
        return Err(ClientError::Status { status, message });
    }

    serde_json::from_str(&body).map_err(|source| {
        debug!(url = %url, error = %source, "discarding malformed response");
        ClientError::Decode { url, source }
    })
}


#[cfg(test)]
mod tests {
    use super::test_server::serve_once;
    use super::*;

    fn client(base_url: String) -> PredictionClient {
        PredictionClient::new(ClientConfig::new(base_url).with_timeout(Duration::from_secs(5)))
            .unwrap()
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let config = ClientConfig::new("http://localhost:8000/");
        assert_eq!(config.endpoint("/predict"), "http://localhost:8000/predict");
        assert_eq!(
            ClientConfig::default().endpoint("historical-data"),
            "http://localhost:8000/historical-data"
        );
    }

    #[test]
    fn error_message_prefers_detail() {
        assert_eq!(
            error_message(r#"{"detail": "Prediction error: boom"}"#, PREDICT_FAILED),
            "Prediction error: boom"
        );
        assert_eq!(error_message(r#"{"other": 1}"#, PREDICT_FAILED), PREDICT_FAILED);
        assert_eq!(error_message("<html>", PREDICT_FAILED), PREDICT_FAILED);
        assert_eq!(error_message(r#"{"detail": ""}"#, PREDICT_FAILED), PREDICT_FAILED);
        assert_eq!(
            error_message(r#"{"detail": [{"loc": ["body", "sqft"]}]}"#, PREDICT_FAILED),
            r#"[{"loc":["body","sqft"]}]"#
        );
    }

    #[test]
    fn predict_decodes_success() {
        let url = serve_once(
            "200 OK",
            r#"{"predicted_price": 400000.0, "confidence": 90.1, "potential_increase": 25.0,
                "recommended_actions": ["Maintain the condition to preserve value."],
                "historical_comparison": {"average": 360000.0, "maximum": 460000.0, "minimum": 300000.0},
                "monthly_trends": []}"#,
        );
        let result = client(url).predict(&PredictionInput::default()).unwrap();
        assert_eq!(result.predicted_price, 400000.0);
        assert_eq!(result.recommended_actions.len(), 1);
    }

    #[test]
    fn predict_surfaces_server_detail() {
        let url = serve_once(
            "500 Internal Server Error",
            r#"{"detail": "Prediction error: model unavailable"}"#,
        );
        let err = client(url).predict(&PredictionInput::default()).unwrap_err();
        match err {
            ClientError::Status { status, ref message } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "Prediction error: model unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn history_failure_uses_generic_message() {
        let url = serve_once("503 Service Unavailable", r#"{"detail": "down"}"#);
        let err = client(url).historical_data().unwrap_err();
        assert_eq!(err.to_string(), HISTORY_FAILED);
    }

    #[test]
    fn history_malformed_payload_is_decode_error() {
        let url = serve_once("200 OK", r#"{"not": "a list"}"#);
        let err = client(url).historical_data().unwrap_err();
        assert!(err.is_decode());
    }
}
