//! Scripted Prediction Port
//!
//! An in-memory [`PredictionPort`] that replays queued outcomes and records
//! every submission it receives.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use core_kernel::SubmissionId;
use domain_claims::{ClaimSubmission, PredictionPort, PredictionResult, SubmitError};

/// Replays scripted outcomes in order
#[derive(Debug, Default)]
pub struct ScriptedPredictionPort {
    outcomes: Mutex<VecDeque<Result<PredictionResult, SubmitError>>>,
    calls: Mutex<Vec<(SubmissionId, ClaimSubmission)>>,
}

impl ScriptedPredictionPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// A port whose next call succeeds with `result`
    pub fn succeeding(result: PredictionResult) -> Self {
        let port = Self::new();
        port.push(Ok(result));
        port
    }

    /// A port whose next call fails with `error`
    pub fn failing(error: SubmitError) -> Self {
        let port = Self::new();
        port.push(Err(error));
        port
    }

    /// Queues another outcome
    pub fn push(&self, outcome: Result<PredictionResult, SubmitError>) {
        self.outcomes.lock().expect("outcomes lock").push_back(outcome);
    }

    /// Number of `predict` calls so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }

    /// Submissions received, oldest first
    pub fn submissions(&self) -> Vec<ClaimSubmission> {
        self.calls
            .lock()
            .expect("calls lock")
            .iter()
            .map(|(_, submission)| submission.clone())
            .collect()
    }
}

#[async_trait]
impl PredictionPort for ScriptedPredictionPort {
    async fn predict(
        &self,
        submission_id: SubmissionId,
        submission: &ClaimSubmission,
    ) -> Result<PredictionResult, SubmitError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((submission_id, submission.clone()));

        // an unscripted call behaves like a request that died without detail
        self.outcomes
            .lock()
            .expect("outcomes lock")
            .pop_front()
            .unwrap_or(Err(SubmitError::Transport { message: None }))
    }
}
