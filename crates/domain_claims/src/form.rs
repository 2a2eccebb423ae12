//! Claim form state
//!
//! Field values are held as text exactly as typed. Nothing is coerced or
//! rejected while editing; completeness is only checked when a submission
//! record is requested.

use crate::error::ClaimFormError;
use crate::field::ClaimField;
use crate::submission::ClaimSubmission;
use crate::validation::{self, ValidationReport};

/// The editable contents of the claim form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: ClaimSubmission,
}

impl FormState {
    /// Creates a form with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces a single field, leaving every other field untouched
    pub fn set(&mut self, field: ClaimField, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Replaces a single field addressed by its wire key
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), ClaimFormError> {
        let field: ClaimField = name.parse()?;
        self.set(field, value);
        Ok(())
    }

    pub fn get(&self, field: ClaimField) -> &str {
        self.values.get(field)
    }

    /// Iterates `(field, value)` pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (ClaimField, &str)> + '_ {
        ClaimField::ALL
            .into_iter()
            .map(move |field| (field, self.values.get(field)))
    }

    /// Fields that do not hold a value yet, in form order
    pub fn missing_fields(&self) -> Vec<ClaimField> {
        self.iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Builds the request record, requiring every field to hold a value.
    ///
    /// Values are copied verbatim, surrounding whitespace included.
    pub fn to_submission(&self) -> Result<ClaimSubmission, ClaimFormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ClaimFormError::MissingFields(missing));
        }
        Ok(self.values.clone())
    }

    /// Checks filled-in values against each field's input constraint
    pub fn validate(&self) -> ValidationReport {
        validation::validate_form(self)
    }

    /// Same as [`FormState::validate`] with an explicit current year
    pub fn validate_for_year(&self, current_year: i32) -> ValidationReport {
        validation::validate_form_for_year(self, current_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = FormState::new();
        assert!(form.iter().all(|(_, value)| value.is_empty()));
        assert_eq!(form.missing_fields().len(), ClaimField::COUNT);
        assert!(!form.is_complete());
    }

    #[test]
    fn test_set_touches_only_target() {
        let mut form = FormState::new();
        form.set(ClaimField::Witnesses, "2");
        form.set(ClaimField::Age, "41");

        assert_eq!(form.get(ClaimField::Witnesses), "2");
        assert_eq!(form.get(ClaimField::Age), "41");
        for (field, value) in form.iter() {
            if field != ClaimField::Witnesses && field != ClaimField::Age {
                assert_eq!(value, "", "{field} should be untouched");
            }
        }
    }

    #[test]
    fn test_set_by_name() {
        let mut form = FormState::new();
        form.set_by_name("capital-gains", "53300").unwrap();
        assert_eq!(form.get(ClaimField::CapitalGains), "53300");

        let err = form.set_by_name("fraud_reported", "Y").unwrap_err();
        assert_eq!(err, ClaimFormError::UnknownField("fraud_reported".to_string()));
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut form = FormState::new();
        for field in ClaimField::ALL {
            form.set(field, "1");
        }
        form.set(ClaimField::AutoYear, "   ");

        assert_eq!(
            form.to_submission(),
            Err(ClaimFormError::MissingFields(vec![ClaimField::AutoYear]))
        );
    }

    #[test]
    fn test_complete_form_is_sent_verbatim() {
        let mut form = FormState::new();
        for field in ClaimField::ALL {
            form.set(field, "7");
        }
        form.set(ClaimField::Age, "abc");

        let submission = form.to_submission().unwrap();
        assert_eq!(submission.age, "abc");
        assert_eq!(submission.capital_loss, "7");
    }
}
