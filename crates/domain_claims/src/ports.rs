//! Prediction Port
//!
//! The claim form only needs one thing from the outside world: a fraud
//! assessment for a completed claim. `PredictionPort` is that seam. The HTTP
//! adapter in `infra_http` talks to the real service; tests plug in scripted
//! or mock-server backed implementations.
//!
//! ```rust,ignore
//! let port: Arc<dyn PredictionPort> = Arc::new(HttpPredictionAdapter::new(config)?);
//! let result = port.predict(SubmissionId::new(), &submission).await?;
//! ```

use async_trait::async_trait;

use core_kernel::SubmissionId;

use crate::error::SubmitError;
use crate::prediction::PredictionResult;
use crate::submission::ClaimSubmission;

/// Source of fraud assessments
#[async_trait]
pub trait PredictionPort: Send + Sync {
    /// Requests an assessment for one claim.
    ///
    /// Exactly one attempt is made. Implementations do not retry.
    ///
    /// # Arguments
    ///
    /// * `submission_id` - Correlation id for logs and request headers
    /// * `submission` - The claim, values as typed
    async fn predict(
        &self,
        submission_id: SubmissionId,
        submission: &ClaimSubmission,
    ) -> Result<PredictionResult, SubmitError>;
}
