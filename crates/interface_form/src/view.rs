//! Render-ready projection of the form
//!
//! Everything the screen shows is decided here; renderers only lay it out.

use domain_claims::{ClaimField, PredictionResult, RiskLevel};

use crate::form::ClaimSubmissionForm;

pub const FORM_TITLE: &str = "Insurance Claim Fraud Detection";
pub const SUBMIT_LABEL: &str = "Check for Fraud";
pub const BUSY_LABEL: &str = "Processing...";
pub const ERROR_HEADING: &str = "Error";
pub const RESULT_HEADING: &str = "Fraud Detection Result";
pub const FRAUD_CONCLUSION: &str = "Potential Fraud Detected";
pub const NO_FRAUD_CONCLUSION: &str = "No Fraud Detected";
pub const RISK_FACTORS_HEADING: &str = "Key Risk Factors:";

/// Whole screen
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
    pub submit: SubmitButtonView,
    pub warnings: Vec<String>,
    pub error: Option<ErrorPanel>,
    pub result: Option<ResultPanel>,
}

/// One labelled input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: ClaimField,
    pub label: &'static str,
    pub value: String,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonView {
    pub label: &'static str,
    pub busy: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub heading: &'static str,
    pub message: String,
}

/// Visual classification of the result panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTone {
    Fraud,
    NoFraud,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub tone: ResultTone,
    pub heading: &'static str,
    /// `"{cluster} - {cluster_description}"`
    pub cluster: String,
    /// Two-decimal percentage, e.g. `91.00%`
    pub probability: String,
    pub conclusion: &'static str,
    pub risk_level: RiskLevel,
    pub recommended_action: String,
    /// Present only when the service reported at least one factor
    pub risk_factors: Option<Vec<String>>,
}

impl FormView {
    pub fn from_form(form: &ClaimSubmissionForm) -> Self {
        let fields = form
            .form_data()
            .iter()
            .map(|(field, value)| FieldView {
                field,
                label: field.label(),
                value: value.to_string(),
                hint: field.constraint().hint(),
            })
            .collect();

        let loading = form.is_loading();
        let submit = SubmitButtonView {
            label: if loading { BUSY_LABEL } else { SUBMIT_LABEL },
            busy: loading,
            disabled: loading,
        };

        Self {
            title: FORM_TITLE,
            fields,
            submit,
            warnings: form.warnings().iter().map(|issue| issue.to_string()).collect(),
            error: form.error().map(|message| ErrorPanel {
                heading: ERROR_HEADING,
                message: message.to_string(),
            }),
            result: form.result().map(ResultPanel::from_result),
        }
    }
}

impl ResultPanel {
    pub fn from_result(result: &PredictionResult) -> Self {
        let (tone, conclusion) = if result.is_fraud {
            (ResultTone::Fraud, FRAUD_CONCLUSION)
        } else {
            (ResultTone::NoFraud, NO_FRAUD_CONCLUSION)
        };

        let risk_level = result.risk_level();
        let recommended_action = result
            .assessment
            .as_ref()
            .map(|assessment| assessment.action.clone())
            .unwrap_or_else(|| risk_level.action().to_string());

        Self {
            tone,
            heading: RESULT_HEADING,
            cluster: format!("{} - {}", result.cluster, result.cluster_description),
            probability: result.probability_percent(),
            conclusion,
            risk_level,
            recommended_action,
            risk_factors: result
                .has_risk_factors()
                .then(|| result.features_analysis.clone()),
        }
    }
}
