//! Claim Submission Form
//!
//! A headless rendition of the claim fraud check form: it owns the form
//! state, runs one prediction request per submit, and projects everything
//! into a [`view::FormView`] that the text renderer draws.
//!
//! # Architecture
//!
//! - **Form**: `ClaimSubmissionForm`, the state machine behind the screen
//! - **View**: Render-ready projection of that state
//! - **Render**: Plain-text drawing of a view for terminals
//! - **Input**: Loading claim values from JSON files and interactive prompts
//! - **Config**: Environment-driven settings
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_form::ClaimSubmissionForm;
//!
//! let mut form = ClaimSubmissionForm::new();
//! form.update_field(ClaimField::Age, "48");
//! form.submit(&adapter).await?;
//! println!("{}", form.view());
//! ```

pub mod config;
pub mod form;
pub mod view;
pub mod render;
pub mod input;

pub use config::FormConfig;
pub use form::{ClaimSubmissionForm, PendingSubmission, SubmitBlocked};
pub use view::{FormView, ResultTone};
pub use render::render_text;
