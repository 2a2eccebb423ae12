//! Claim Fraud Check Domain
//!
//! This crate models the claim form and its exchange with the fraud
//! prediction service.
//!
//! # Data Flow
//!
//! ```text
//! user input -> FormState -> ClaimSubmission -> PredictionPort -> PredictionResult | SubmitError
//! ```

pub mod field;
pub mod form;
pub mod submission;
pub mod validation;
pub mod prediction;
pub mod risk;
pub mod ports;
pub mod error;

pub use field::{ClaimField, FieldConstraint, NumericKind};
pub use form::FormState;
pub use submission::ClaimSubmission;
pub use validation::{FieldIssue, IssueKind, ValidationReport};
pub use prediction::{ClusterId, PredictionResult, RiskAssessment};
pub use risk::RiskLevel;
pub use ports::PredictionPort;
pub use error::{ClaimFormError, SubmitError, FALLBACK_ERROR_MESSAGE};
