//! Test Data Builders
//!
//! Builder patterns for claim forms and prediction results. Tests specify
//! only the values they care about; everything else comes from the fixtures.

use domain_claims::{ClaimField, ClusterId, FormState, PredictionResult};

use crate::fixtures::{ClaimFixtures, PredictionFixtures};

/// Builder for claim forms, starting from the valid fixture
pub struct FormStateBuilder {
    form: FormState,
}

impl Default for FormStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStateBuilder {
    /// Starts from [`ClaimFixtures::valid_form`]
    pub fn new() -> Self {
        Self { form: ClaimFixtures::valid_form() }
    }

    /// Sets a field value
    pub fn with(mut self, field: ClaimField, value: impl Into<String>) -> Self {
        self.form.set(field, value);
        self
    }

    /// Clears a field
    pub fn without(mut self, field: ClaimField) -> Self {
        self.form.set(field, "");
        self
    }

    pub fn build(self) -> FormState {
        self.form
    }
}

/// Builder for prediction results, starting from the low-risk fixture
pub struct PredictionResultBuilder {
    result: PredictionResult,
}

impl Default for PredictionResultBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionResultBuilder {
    pub fn new() -> Self {
        Self { result: PredictionFixtures::low_risk() }
    }

    /// Sets the cluster id and description
    pub fn with_cluster(mut self, cluster: impl Into<ClusterId>, description: impl Into<String>) -> Self {
        self.result.cluster = cluster.into();
        self.result.cluster_description = description.into();
        self
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.result.fraud_probability = probability;
        self
    }

    pub fn fraud(mut self, is_fraud: bool) -> Self {
        self.result.is_fraud = is_fraud;
        self
    }

    /// Replaces the risk factor list
    pub fn with_factors(mut self, factors: &[&str]) -> Self {
        self.result.features_analysis = factors.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn build(self) -> PredictionResult {
        self.result
    }
}
