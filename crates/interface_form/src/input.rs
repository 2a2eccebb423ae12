//! Claim value sources for the command line front end

use serde_json::Value;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use thiserror::Error;

use domain_claims::ClaimFormError;

use crate::form::ClaimSubmissionForm;

/// Errors raised while reading claim values
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Claim file is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Field {field} must be a string or number")]
    UnsupportedValue { field: String },

    #[error(transparent)]
    Form(#[from] ClaimFormError),

    #[error("Expected NAME=VALUE, got {0:?}")]
    Assignment(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Applies a JSON claim object to the form.
///
/// Keys are wire names. Strings are taken verbatim, numbers in their JSON
/// spelling, `null` clears the field. Keys not on the form are rejected.
pub fn apply_json_claim(form: &mut ClaimSubmissionForm, json: &str) -> Result<(), InputError> {
    let values: BTreeMap<String, Value> = serde_json::from_str(json)?;
    for (name, value) in values {
        let text = match value {
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            Value::Null => String::new(),
            _ => return Err(InputError::UnsupportedValue { field: name }),
        };
        form.update_field_by_name(&name, text)?;
    }
    Ok(())
}

/// Splits a `NAME=VALUE` command line assignment
pub fn parse_assignment(raw: &str) -> Result<(String, String), InputError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| InputError::Assignment(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::Assignment(raw.to_string()));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Prompts for every empty field, one line per field.
///
/// An empty answer leaves the field empty. Stops early at end of input.
pub fn prompt_missing<R: BufRead, W: Write>(
    form: &mut ClaimSubmissionForm,
    mut reader: R,
    mut writer: W,
) -> Result<(), InputError> {
    for field in form.form_data().missing_fields() {
        write!(writer, "{} [{}]: ", field.label(), field.constraint().hint())?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        form.update_field(field, line.trim_end_matches(['\r', '\n']));
    }
    Ok(())
}
