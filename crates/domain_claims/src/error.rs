//! Claim form errors

use serde::Deserialize;
use thiserror::Error;

use crate::field::ClaimField;

/// Text shown when no better explanation of a failed submit exists
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Errors raised while editing or serializing the claim form
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimFormError {
    #[error("Unknown claim field: {0}")]
    UnknownField(String),

    #[error("Missing required fields: {}", join_names(.0))]
    MissingFields(Vec<ClaimField>),
}

fn join_names(fields: &[ClaimField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Why a prediction request failed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// No response body was available (connection refused, DNS, TLS, ...)
    #[error("Transport failure: {}", .message.as_deref().unwrap_or("no details"))]
    Transport { message: Option<String> },

    /// The service answered with a non-success status
    #[error("Prediction service responded with status {status}")]
    Server { status: u16, message: Option<String> },

    /// A success status whose body is not a prediction
    #[error("Unexpected response from prediction service: {message}")]
    Decode { message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl SubmitError {
    pub fn transport(message: impl Into<String>) -> Self {
        SubmitError::Transport { message: Some(message.into()) }
    }

    /// Builds a server failure from a non-success response body.
    ///
    /// Only a non-empty string under the `error` key counts as a server
    /// message; any other body shape leaves `message` empty.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| match body.error {
                Some(serde_json::Value::String(text)) if !text.trim().is_empty() => Some(text),
                _ => None,
            });
        SubmitError::Server { status, message }
    }

    /// The message shown in the error panel.
    ///
    /// Precedence: the server's own message, then the transport-level
    /// description, then [`FALLBACK_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Server { message: Some(message), .. } => message.clone(),
            SubmitError::Server { status, message: None } => {
                format!("Request failed with status code {status}")
            }
            SubmitError::Transport { message: Some(message) } if !message.trim().is_empty() => {
                message.clone()
            }
            SubmitError::Transport { .. } => FALLBACK_ERROR_MESSAGE.to_string(),
            SubmitError::Decode { .. } => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let error = SubmitError::from_response(503, br#"{"error": "Model unavailable"}"#);
        assert_eq!(error.user_message(), "Model unavailable");
    }

    #[test]
    fn test_server_without_message_uses_status_text() {
        let error = SubmitError::from_response(500, b"<html>oops</html>");
        assert_eq!(error.user_message(), "Request failed with status code 500");

        let error = SubmitError::from_response(400, br#"{"error": {"code": 7}}"#);
        assert_eq!(error.user_message(), "Request failed with status code 400");

        let error = SubmitError::from_response(422, br#"{"error": "  "}"#);
        assert_eq!(error.user_message(), "Request failed with status code 422");
    }

    #[test]
    fn test_transport_message_then_fallback() {
        assert_eq!(
            SubmitError::transport("connection refused").user_message(),
            "connection refused"
        );
        assert_eq!(
            SubmitError::Transport { message: None }.user_message(),
            FALLBACK_ERROR_MESSAGE
        );
        assert_eq!(
            SubmitError::Transport { message: Some(String::new()) }.user_message(),
            FALLBACK_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_missing_fields_lists_wire_names() {
        let error = ClaimFormError::MissingFields(vec![ClaimField::Age, ClaimField::CapitalLoss]);
        assert_eq!(error.to_string(), "Missing required fields: age, capital-loss");
    }
}
