//! HTTP Infrastructure
//!
//! Implements [`domain_claims::PredictionPort`] over HTTP with reqwest.
//!
//! # Error Mapping
//!
//! - No response (connect, DNS, TLS, timeout) -> `SubmitError::Transport`
//! - Non-2xx response -> `SubmitError::Server`, message from the body's `error` key
//! - 2xx response that is not a prediction -> `SubmitError::Decode`

pub mod config;
pub mod client;
pub mod error;

pub use config::PredictionClientConfig;
pub use client::HttpPredictionAdapter;
pub use error::HttpAdapterError;
