//! Form configuration

use serde::Deserialize;

use infra_http::PredictionClientConfig;

/// Environment variable prefix, e.g. `CLAIM_FORM_ENDPOINT`
pub const ENV_PREFIX: &str = "CLAIM_FORM";

/// Claim form configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Base URL of the prediction service
    pub endpoint: String,
    /// Block submission when any field breaks its input constraint
    pub strict_validation: bool,
    /// Request timeout in seconds, unset for no timeout
    pub request_timeout_secs: Option<u64>,
    /// Log level
    pub log_level: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            strict_validation: false,
            request_timeout_secs: None,
            log_level: "info".to_string(),
        }
    }
}

impl FormConfig {
    /// Loads configuration from `CLAIM_FORM_*` environment variables,
    /// falling back to defaults for anything unset
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Settings for the HTTP adapter
    pub fn client_config(&self) -> PredictionClientConfig {
        PredictionClientConfig {
            base_url: self.endpoint.clone(),
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}
