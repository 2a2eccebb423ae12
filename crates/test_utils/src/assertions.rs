//! Custom Test Assertions
//!
//! Assertion helpers for claim forms and validation reports that print the
//! offending field instead of a whole struct dump.

use domain_claims::{ClaimField, FormState, IssueKind, ValidationReport};

/// Asserts that `after` equals `before` everywhere except `changed`
///
/// # Panics
///
/// Panics naming the first other field whose value differs
pub fn assert_only_field_changed(before: &FormState, after: &FormState, changed: ClaimField) {
    for field in ClaimField::ALL {
        if field == changed {
            continue;
        }
        assert_eq!(
            before.get(field),
            after.get(field),
            "field {field} changed although only {changed} was edited"
        );
    }
}

/// Asserts that the report flags `field` with an issue matching `expected`
pub fn assert_has_issue(report: &ValidationReport, field: ClaimField, expected: &IssueKind) {
    let found: Vec<_> = report.for_field(field).map(|issue| &issue.kind).collect();
    assert!(
        found.contains(&expected),
        "expected {expected:?} for {field}, found {found:?}"
    );
}

/// Asserts that the report has nothing to say about `field`
pub fn assert_field_clean(report: &ValidationReport, field: ClaimField) {
    let found: Vec<_> = report.for_field(field).collect();
    assert!(found.is_empty(), "expected no issues for {field}, found {found:?}");
}
