//! Property-Based Test Generators
//!
//! Provides proptest strategies for claim fields and the text typed into
//! them, including values that satisfy each field's input constraint.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_claims::{ClaimField, FormState, NumericKind};

/// Year used by generators for the `auto_year` upper bound
pub const GENERATOR_YEAR: i32 = 2026;

/// Strategy for picking any claim field
pub fn claim_field_strategy() -> impl Strategy<Value = ClaimField> {
    (0..ClaimField::COUNT).prop_map(|index| ClaimField::ALL[index])
}

/// Strategy for text a user might type into a number input
pub fn typed_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "-?[0-9]{1,6}",
        "[0-9]{1,5}\\.[0-9]{1,3}",
        "[a-z ]{1,6}",
    ]
}

/// Strategy for a value that satisfies `field`'s constraint
pub fn valid_value_strategy(field: ClaimField) -> BoxedStrategy<String> {
    let constraint = field.constraint_for_year(GENERATOR_YEAR);
    let min = constraint.min.mantissa() as i64;
    let max = constraint
        .max
        .map(|max| max.mantissa() as i64)
        .unwrap_or(min + 250_000);

    match (constraint.kind, constraint.step) {
        (NumericKind::Integer, _) => (min..=max).prop_map(|n| n.to_string()).boxed(),
        (NumericKind::Decimal, Some(step)) if step >= Decimal::ONE => {
            let step = step.mantissa() as i64;
            (0..=(max - min) / step)
                .prop_map(move |n| (min + n * step).to_string())
                .boxed()
        }
        (NumericKind::Decimal, Some(_)) => (min * 100..=max * 100)
            .prop_map(|cents| Decimal::new(cents, 2).to_string())
            .boxed(),
        (NumericKind::Decimal, None) => (min..=max).prop_map(|n| n.to_string()).boxed(),
    }
}

/// Strategy for a complete form whose every value satisfies its constraint
pub fn valid_form_strategy() -> impl Strategy<Value = FormState> {
    ClaimField::ALL
        .map(valid_value_strategy)
        .into_iter()
        .collect::<Vec<_>>()
        .prop_map(|values| {
            let mut form = FormState::new();
            for (field, value) in ClaimField::ALL.into_iter().zip(values) {
                form.set(field, value);
            }
            form
        })
}

/// Strategy for a sequence of field edits
pub fn field_updates_strategy(max_len: usize) -> impl Strategy<Value = Vec<(ClaimField, String)>> {
    proptest::collection::vec((claim_field_strategy(), typed_text_strategy()), 1..max_len)
}
