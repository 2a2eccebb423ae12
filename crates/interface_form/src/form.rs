//! Claim submission form state
//!
//! ```text
//!            update_field (any time)
//!                   |
//! idle --begin_submit--> loading --finish_submit--> idle + (result | error)
//! ```
//!
//! A submit always discards the previous outcome before the request starts,
//! so `result` and `error` are never both set once a submit has settled.

use thiserror::Error;
use tracing::{info, warn};

use core_kernel::SubmissionId;
use domain_claims::{
    ClaimField, ClaimFormError, ClaimSubmission, FieldIssue, FormState, PredictionPort,
    PredictionResult, SubmitError,
};

use crate::config::FormConfig;
use crate::view::FormView;

/// Why a submit did not start a request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("A submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Form(#[from] ClaimFormError),

    #[error("{} field(s) break their input constraints", .0.len())]
    Invalid(Vec<FieldIssue>),
}

/// A request that has been started but not settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    id: SubmissionId,
    submission: ClaimSubmission,
}

impl PendingSubmission {
    pub fn id(&self) -> SubmissionId {
        self.id
    }

    /// The exact record to send
    pub fn submission(&self) -> &ClaimSubmission {
        &self.submission
    }
}

/// The claim fraud check form
#[derive(Debug, Clone, Default)]
pub struct ClaimSubmissionForm {
    form_data: FormState,
    result: Option<PredictionResult>,
    loading: bool,
    error: Option<String>,
    warnings: Vec<FieldIssue>,
    strict_validation: bool,
}

impl ClaimSubmissionForm {
    /// Creates a form with every field empty and advisory validation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &FormConfig) -> Self {
        Self {
            strict_validation: config.strict_validation,
            ..Self::default()
        }
    }

    /// Creates a form pre-filled with `form_data`
    pub fn with_form_data(mut self, form_data: FormState) -> Self {
        self.form_data = form_data;
        self
    }

    pub fn form_data(&self) -> &FormState {
        &self.form_data
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Constraint issues found by the last submit attempt
    pub fn warnings(&self) -> &[FieldIssue] {
        &self.warnings
    }

    /// Replaces one field's value. Nothing else changes and no validation runs.
    pub fn update_field(&mut self, field: ClaimField, value: impl Into<String>) {
        self.form_data.set(field, value);
    }

    /// Replaces one field's value, addressed by its wire key
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ClaimFormError> {
        self.form_data.set_by_name(name, value)
    }

    /// Starts a submission.
    ///
    /// Refuses while a request is in flight, when a field is empty, and, in
    /// strict mode, when a field breaks its constraint. Otherwise enters the
    /// loading state with the previous result and error cleared.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitBlocked> {
        if self.loading {
            return Err(SubmitBlocked::InFlight);
        }

        let submission = self.form_data.to_submission()?;

        let report = self.form_data.validate();
        for issue in report.issues() {
            warn!(field = %issue.field, value = %issue.value, "{issue}");
        }
        self.warnings = report.into_issues();
        if self.strict_validation && !self.warnings.is_empty() {
            return Err(SubmitBlocked::Invalid(self.warnings.clone()));
        }

        self.loading = true;
        self.error = None;
        self.result = None;

        let id = SubmissionId::new();
        info!(submission_id = %id, warnings = self.warnings.len(), "submitting claim");
        Ok(PendingSubmission { id, submission })
    }

    /// Settles a submission with the request outcome and leaves the loading state
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<PredictionResult, SubmitError>,
    ) {
        match outcome {
            Ok(result) => {
                info!(
                    submission_id = %pending.id,
                    is_fraud = result.is_fraud,
                    probability = result.fraud_probability,
                    "claim assessed"
                );
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                let message = err.user_message();
                warn!(submission_id = %pending.id, error = %err, "claim assessment failed");
                self.error = Some(message);
                self.result = None;
            }
        }
        self.loading = false;
    }

    /// Submits the form through `port`: one request, then settle.
    ///
    /// The loading flag is cleared even if this future is dropped before the
    /// request completes.
    pub async fn submit(&mut self, port: &dyn PredictionPort) -> Result<(), SubmitBlocked> {
        let pending = self.begin_submit()?;
        let outcome = {
            let _reset = LoadingReset(&mut self.loading);
            port.predict(pending.id, &pending.submission).await
        };
        self.finish_submit(pending, outcome);
        Ok(())
    }

    /// Render-ready projection of the current state
    pub fn view(&self) -> FormView {
        FormView::from_form(self)
    }
}

struct LoadingReset<'a>(&'a mut bool);

impl Drop for LoadingReset<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::{IssueKind, FALLBACK_ERROR_MESSAGE};
    use rust_decimal::Decimal;

    fn filled() -> ClaimSubmissionForm {
        let mut form = ClaimSubmissionForm::new();
        for field in ClaimField::ALL {
            form.update_field(field, field.constraint().min.to_string());
        }
        form
    }

    #[test]
    fn test_begin_submit_enters_loading_and_clears_outcome() {
        let mut form = filled();
        form.error = Some("old".to_string());

        let pending = form.begin_submit().unwrap();
        assert!(form.is_loading());
        assert!(form.error().is_none());
        assert!(form.result().is_none());
        assert_eq!(pending.submission().age, "18");
    }

    #[test]
    fn test_second_begin_is_refused_while_loading() {
        let mut form = filled();
        let _pending = form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
        assert!(form.is_loading());
    }

    #[test]
    fn test_incomplete_form_is_refused_without_state_change() {
        let mut form = ClaimSubmissionForm::new();
        form.update_field(ClaimField::Age, "30");

        let blocked = form.begin_submit().unwrap_err();
        assert!(matches!(blocked, SubmitBlocked::Form(ClaimFormError::MissingFields(ref f)) if f.len() == 15));
        assert!(!form.is_loading());
    }

    #[test]
    fn test_finish_always_clears_loading() {
        let mut form = filled();
        let pending = form.begin_submit().unwrap();
        form.finish_submit(pending, Err(SubmitError::Transport { message: None }));

        assert!(!form.is_loading());
        assert_eq!(form.error(), Some(FALLBACK_ERROR_MESSAGE));
        assert!(form.result().is_none());
    }

    #[test]
    fn test_strict_mode_blocks_invalid_values() {
        let config = FormConfig { strict_validation: true, ..FormConfig::default() };
        let mut form = ClaimSubmissionForm::with_config(&config).with_form_data(filled().form_data);
        form.update_field(ClaimField::Age, "12");

        let blocked = form.begin_submit().unwrap_err();
        assert!(matches!(blocked, SubmitBlocked::Invalid(ref issues) if issues.len() == 1));
        assert!(!form.is_loading());
        assert_eq!(form.warnings().len(), 1);
    }

    #[test]
    fn test_strict_mode_blocks_values_too_large_for_i64() {
        let config = FormConfig { strict_validation: true, ..FormConfig::default() };
        let mut form = ClaimSubmissionForm::with_config(&config).with_form_data(filled().form_data);
        form.update_field(ClaimField::Age, "99999999999999999999");

        let blocked = form.begin_submit().unwrap_err();
        assert!(matches!(
            blocked,
            SubmitBlocked::Invalid(ref issues)
                if issues.len() == 1 && issues[0].kind == IssueKind::AboveMaximum { max: Decimal::from(100) }
        ));
        assert!(!form.is_loading());
    }

    #[test]
    fn test_lenient_mode_sends_invalid_values_with_warnings() {
        let mut form = filled();
        form.update_field(ClaimField::Age, "12");

        let pending = form.begin_submit().unwrap();
        assert_eq!(pending.submission().age, "12");
        assert_eq!(form.warnings().len(), 1);
    }
}
