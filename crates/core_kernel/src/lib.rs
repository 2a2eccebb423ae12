//! Core Kernel - Foundational types shared by the claim fraud check crates
//!
//! This crate provides the small building blocks used by every other crate:
//! - Submission identifiers used to correlate a form submit with its request
//! - Exact decimal handling for the numeric text held in claim form fields
//! - The kernel error type

pub mod identifiers;
pub mod numeric;
pub mod error;

pub use identifiers::SubmissionId;
pub use numeric::{parse_decimal, is_integral, is_on_step};
pub use error::CoreError;
