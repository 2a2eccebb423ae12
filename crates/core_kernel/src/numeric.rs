//! Numeric field values
//!
//! Claim form fields hold text until submission. These helpers interpret that
//! text as an exact decimal so range and step checks never suffer from binary
//! floating point error (`0.1 + 0.2` style mismatches on `step = 0.01`).

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::CoreError;

/// Parses user-entered text as an exact decimal.
///
/// Surrounding whitespace is ignored. Plain notation (`1250.50`) and
/// scientific notation (`1.2e3`) are both accepted, as a browser number
/// input would accept them.
///
/// # Errors
///
/// * `CoreError::EmptyValue` - the text is empty after trimming
/// * `CoreError::NotANumber` - the text is not a finite number
/// * `CoreError::OutOfRange` - a finite number whose magnitude exceeds
///   `Decimal::MAX` (about 7.9e28)
pub fn parse_decimal(raw: &str) -> Result<Decimal, CoreError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(CoreError::EmptyValue);
    }

    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str(text)
    };

    parsed.map_err(|_| match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() >= 1.0 => CoreError::OutOfRange {
            value: raw.to_string(),
            negative: value.is_sign_negative(),
        },
        _ => CoreError::NotANumber(raw.to_string()),
    })
}

/// Returns true when the value has no fractional part
pub fn is_integral(value: Decimal) -> bool {
    value.fract().is_zero()
}

/// Returns true when `value` lies on the step grid anchored at `base`.
///
/// This is the number-input step rule: a value is valid when
/// `(value - base)` is an exact multiple of `step`. A zero step means
/// "any value".
pub fn is_on_step(value: Decimal, base: Decimal, step: Decimal) -> bool {
    if step.is_zero() {
        return true;
    }
    ((value - base) % step).is_zero()
}
