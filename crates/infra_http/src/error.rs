//! Adapter construction errors

use thiserror::Error;

/// Errors raised while building the HTTP adapter
#[derive(Debug, Error)]
pub enum HttpAdapterError {
    #[error("Invalid prediction endpoint {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}
