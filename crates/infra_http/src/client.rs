//! HTTP Prediction Adapter
//!
//! Sends one JSON `POST` per submission to the prediction service and maps
//! the outcome onto [`SubmitError`]. Failed requests are not retried; the
//! error goes straight back to the form.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_http::{HttpPredictionAdapter, PredictionClientConfig};
//!
//! let adapter = HttpPredictionAdapter::new(PredictionClientConfig::new("http://localhost:8000"))?;
//! let result = adapter.predict(SubmissionId::new(), &submission).await?;
//! ```

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn, Instrument};

use core_kernel::SubmissionId;
use domain_claims::{ClaimSubmission, PredictionPort, PredictionResult, SubmitError};

use crate::config::PredictionClientConfig;
use crate::error::HttpAdapterError;

/// Header carrying the submission id to the service
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// [`PredictionPort`] backed by the prediction service's REST endpoint
#[derive(Debug, Clone)]
pub struct HttpPredictionAdapter {
    client: reqwest::Client,
    predict_url: reqwest::Url,
}

impl HttpPredictionAdapter {
    /// Builds the adapter and its connection pool.
    ///
    /// # Errors
    ///
    /// * `HttpAdapterError::InvalidEndpoint` - the base URL does not parse
    /// * `HttpAdapterError::Client` - the TLS backend could not be initialised
    pub fn new(config: PredictionClientConfig) -> Result<Self, HttpAdapterError> {
        let raw_url = config.predict_url();
        let predict_url = reqwest::Url::parse(&raw_url).map_err(|err| {
            HttpAdapterError::InvalidEndpoint {
                url: raw_url.clone(),
                reason: err.to_string(),
            }
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            predict_url,
        })
    }

    /// The endpoint every submission is posted to
    pub fn predict_url(&self) -> &reqwest::Url {
        &self.predict_url
    }

    async fn send(
        &self,
        submission_id: SubmissionId,
        submission: &ClaimSubmission,
    ) -> Result<PredictionResult, SubmitError> {
        let response = self
            .client
            .post(self.predict_url.clone())
            .header(REQUEST_ID_HEADER, submission_id.to_string())
            .json(submission)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;
        debug!(status = status.as_u16(), bytes = body.len(), "prediction response received");

        if !status.is_success() {
            return Err(SubmitError::from_response(status.as_u16(), &body));
        }

        serde_json::from_slice::<PredictionResult>(&body).map_err(|err| SubmitError::Decode {
            message: err.to_string(),
        })
    }
}

fn transport_error(err: reqwest::Error) -> SubmitError {
    SubmitError::Transport {
        message: Some(err.to_string()),
    }
}

#[async_trait]
impl PredictionPort for HttpPredictionAdapter {
    async fn predict(
        &self,
        submission_id: SubmissionId,
        submission: &ClaimSubmission,
    ) -> Result<PredictionResult, SubmitError> {
        let span = tracing::info_span!(
            "predict",
            %submission_id,
            url = %self.predict_url,
        );

        async {
            let outcome = self.send(submission_id, submission).await;
            match &outcome {
                Ok(result) => info!(
                    cluster = %result.cluster,
                    is_fraud = result.is_fraud,
                    "prediction received"
                ),
                Err(err) => warn!(error = %err, "prediction request failed"),
            }
            outcome
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unparsable_base_url() {
        let err = HttpPredictionAdapter::new(PredictionClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, HttpAdapterError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_builds_predict_url() {
        let adapter =
            HttpPredictionAdapter::new(PredictionClientConfig::new("http://127.0.0.1:8000/")).unwrap();
        assert_eq!(adapter.predict_url().as_str(), "http://127.0.0.1:8000/api/predict");
    }
}
