//! Prediction client configuration

use serde::Deserialize;

/// Path of the prediction endpoint, relative to the service base URL
pub const PREDICT_PATH: &str = "/api/predict";

/// Connection settings for the prediction service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictionClientConfig {
    /// Base URL of the service, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Per-request timeout. `None` waits as long as the transport allows.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for PredictionClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl PredictionClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Full URL of the prediction endpoint
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PREDICT_PATH)
    }
}
