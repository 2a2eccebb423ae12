//! Core error types used across the workspace

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("Empty value")]
    EmptyValue,

    #[error("Number out of range: {value}")]
    OutOfRange { value: String, negative: bool },
}
