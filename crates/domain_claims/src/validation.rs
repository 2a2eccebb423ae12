//! Advisory validation of claim form values
//!
//! Mirrors the checks a number input performs (numeric text, whole numbers,
//! range, step) without blocking anything by itself. Callers decide whether a
//! non-empty report stops a submission.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;
use validator::Validate;

use core_kernel::{is_integral, is_on_step, parse_decimal, CoreError};

use crate::field::{current_year, ClaimField, FieldConstraint, NumericKind};
use crate::form::FormState;

/// What is wrong with a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    NotANumber,
    NotAnInteger,
    BelowMinimum { min: Decimal },
    AboveMaximum { max: Decimal },
    OffStep { step: Decimal },
}

/// A single constraint violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: ClaimField,
    pub value: String,
    pub kind: IssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.field.label();
        let value = self.value.trim();
        match &self.kind {
            IssueKind::NotANumber => write!(f, "{label}: \"{value}\" is not a number"),
            IssueKind::NotAnInteger => write!(f, "{label}: {value} is not a whole number"),
            IssueKind::BelowMinimum { min } => {
                write!(f, "{label}: {value} is below the minimum of {min}")
            }
            IssueKind::AboveMaximum { max } => {
                write!(f, "{label}: {value} is above the maximum of {max}")
            }
            IssueKind::OffStep { step } => write!(f, "{label}: {value} is not a multiple of {step}"),
        }
    }
}

/// Outcome of validating a form, issues ordered by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    pub fn for_field(&self, field: ClaimField) -> impl Iterator<Item = &FieldIssue> {
        self.issues.iter().filter(move |issue| issue.field == field)
    }
}

/// Typed view of the form used for range checks. Empty, unparsable or
/// unrepresentable fields stay `None` and are skipped here.
#[derive(Debug, Default, Validate)]
struct ParsedClaim {
    #[validate(range(min = 0))]
    months_as_customer: Option<i64>,
    #[validate(range(min = 18, max = 100))]
    age: Option<i64>,
    #[validate(range(min = 0.0))]
    policy_deductable: Option<f64>,
    #[validate(range(min = 0.0))]
    policy_annual_premium: Option<f64>,
    #[validate(range(min = 0.0))]
    umbrella_limit: Option<f64>,
    #[validate(range(min = 0.0))]
    capital_gains: Option<f64>,
    #[validate(range(min = 0.0))]
    capital_loss: Option<f64>,
    #[validate(range(min = 0, max = 23))]
    incident_hour_of_the_day: Option<i64>,
    #[validate(range(min = 1, max = 10))]
    number_of_vehicles_involved: Option<i64>,
    #[validate(range(min = 0, max = 10))]
    bodily_injuries: Option<i64>,
    #[validate(range(min = 0, max = 10))]
    witnesses: Option<i64>,
    #[validate(range(min = 0.0))]
    total_claim_amount: Option<f64>,
    #[validate(range(min = 0.0))]
    injury_claim: Option<f64>,
    #[validate(range(min = 0.0))]
    property_claim: Option<f64>,
    #[validate(range(min = 0.0))]
    vehicle_claim: Option<f64>,
    // upper bound moves with the calendar, checked separately
    #[validate(range(min = 1900))]
    auto_year: Option<i64>,
}

impl ParsedClaim {
    /// Stores `value` in its typed slot. Returns false when the value does not
    /// fit the slot type, leaving the slot empty.
    fn assign(&mut self, field: ClaimField, value: Decimal) -> bool {
        let whole = value.to_i64();
        let real = value.to_f64();
        let fits = match field.constraint().kind {
            NumericKind::Integer => whole.is_some(),
            NumericKind::Decimal => real.is_some(),
        };
        match field {
            ClaimField::MonthsAsCustomer => self.months_as_customer = whole,
            ClaimField::Age => self.age = whole,
            ClaimField::PolicyDeductable => self.policy_deductable = real,
            ClaimField::PolicyAnnualPremium => self.policy_annual_premium = real,
            ClaimField::UmbrellaLimit => self.umbrella_limit = real,
            ClaimField::CapitalGains => self.capital_gains = real,
            ClaimField::CapitalLoss => self.capital_loss = real,
            ClaimField::IncidentHourOfTheDay => self.incident_hour_of_the_day = whole,
            ClaimField::NumberOfVehiclesInvolved => self.number_of_vehicles_involved = whole,
            ClaimField::BodilyInjuries => self.bodily_injuries = whole,
            ClaimField::Witnesses => self.witnesses = whole,
            ClaimField::TotalClaimAmount => self.total_claim_amount = real,
            ClaimField::InjuryClaim => self.injury_claim = real,
            ClaimField::PropertyClaim => self.property_claim = real,
            ClaimField::VehicleClaim => self.vehicle_claim = real,
            ClaimField::AutoYear => self.auto_year = whole,
        }
        fits
    }
}

fn range_issue(value: Decimal, constraint: &FieldConstraint) -> Option<IssueKind> {
    if value < constraint.min {
        return Some(IssueKind::BelowMinimum { min: constraint.min });
    }
    match constraint.max {
        Some(max) if value > max => Some(IssueKind::AboveMaximum { max }),
        _ => None,
    }
}

/// Validates a form against the current calendar year
pub fn validate_form(form: &FormState) -> ValidationReport {
    validate_form_for_year(form, current_year())
}

/// Validates a form, capping `auto_year` at `current_year`
pub fn validate_form_for_year(form: &FormState, current_year: i32) -> ValidationReport {
    let mut issues = Vec::new();
    let mut parsed = ParsedClaim::default();
    let mut numbers: HashMap<ClaimField, Decimal> = HashMap::new();

    for (field, raw) in form.iter() {
        if raw.trim().is_empty() {
            continue;
        }
        let issue = |kind| FieldIssue { field, value: raw.to_string(), kind };

        let constraint = field.constraint_for_year(current_year);
        let value = match parse_decimal(raw) {
            Ok(value) => value,
            Err(CoreError::OutOfRange { negative: true, .. }) => {
                issues.push(issue(IssueKind::BelowMinimum { min: constraint.min }));
                continue;
            }
            Err(CoreError::OutOfRange { negative: false, .. }) => {
                if let Some(max) = constraint.max {
                    issues.push(issue(IssueKind::AboveMaximum { max }));
                }
                continue;
            }
            Err(_) => {
                issues.push(issue(IssueKind::NotANumber));
                continue;
            }
        };

        if constraint.kind == NumericKind::Integer && !is_integral(value) {
            issues.push(issue(IssueKind::NotAnInteger));
            continue;
        }
        if let Some(step) = constraint.step {
            if !is_on_step(value, constraint.min, step) {
                issues.push(issue(IssueKind::OffStep { step }));
            }
        }

        if parsed.assign(field, value) {
            numbers.insert(field, value);
        } else if let Some(kind) = range_issue(value, &constraint) {
            issues.push(issue(kind));
        }
    }

    if let Err(errors) = parsed.validate() {
        for (name, _) in errors.field_errors() {
            let Some(field) = ClaimField::from_ident(&name) else {
                continue;
            };
            let Some(value) = numbers.get(&field).copied() else {
                continue;
            };
            let Some(kind) = range_issue(value, &field.constraint_for_year(current_year)) else {
                continue;
            };
            issues.push(FieldIssue { field, value: form.get(field).to_string(), kind });
        }
    }

    if let Some(year) = parsed.auto_year {
        if year > i64::from(current_year) {
            let max = Decimal::from(current_year);
            issues.push(FieldIssue {
                field: ClaimField::AutoYear,
                value: form.get(ClaimField::AutoYear).to_string(),
                kind: IssueKind::AboveMaximum { max },
            });
        }
    }

    issues.sort_by_key(|issue| issue.field.index());
    tracing::debug!(issues = issues.len(), "claim form validated");
    ValidationReport { issues }
}
