//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim fraud check test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claim forms and prediction payloads
//! - `builders`: Builder patterns for forms and prediction results
//! - `ports`: Scripted in-memory `PredictionPort`
//! - `mock_server`: An axum server standing in for the prediction service
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod ports;
pub mod mock_server;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use ports::*;
pub use mock_server::*;
pub use assertions::*;
pub use generators::*;
