//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claim forms and prediction service payloads. The
//! claim values are a realistic, fully valid auto claim so tests can change
//! one field at a time.

use serde_json::{json, Value};

use domain_claims::{ClaimField, ClaimSubmission, FormState, PredictionResult};

/// Fixture for claim form data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Valid value for every field, in form order
    pub fn valid_values() -> [(ClaimField, &'static str); ClaimField::COUNT] {
        [
            (ClaimField::MonthsAsCustomer, "328"),
            (ClaimField::Age, "48"),
            (ClaimField::PolicyDeductable, "1000"),
            (ClaimField::PolicyAnnualPremium, "1406.91"),
            (ClaimField::UmbrellaLimit, "0"),
            (ClaimField::CapitalGains, "53300"),
            (ClaimField::CapitalLoss, "0"),
            (ClaimField::IncidentHourOfTheDay, "5"),
            (ClaimField::NumberOfVehiclesInvolved, "1"),
            (ClaimField::BodilyInjuries, "1"),
            (ClaimField::Witnesses, "2"),
            (ClaimField::TotalClaimAmount, "71610"),
            (ClaimField::InjuryClaim, "6510"),
            (ClaimField::PropertyClaim, "13020"),
            (ClaimField::VehicleClaim, "52080"),
            (ClaimField::AutoYear, "2004"),
        ]
    }

    /// A completely filled, valid form
    pub fn valid_form() -> FormState {
        let mut form = FormState::new();
        for (field, value) in Self::valid_values() {
            form.set(field, value);
        }
        form
    }

    /// The submission record of [`ClaimFixtures::valid_form`]
    pub fn valid_submission() -> ClaimSubmission {
        let mut submission = ClaimSubmission::default();
        for (field, value) in Self::valid_values() {
            submission.set(field, value);
        }
        submission
    }
}

/// Fixture for prediction service payloads
pub struct PredictionFixtures;

impl PredictionFixtures {
    /// Flat high-risk response with a single risk factor
    pub fn high_risk_json() -> Value {
        json!({
            "cluster": 2,
            "cluster_description": "High-risk cluster",
            "fraud_probability": 0.91,
            "is_fraud": true,
            "features_analysis": ["Unusual claim timing"]
        })
    }

    /// Flat low-risk response without risk factors
    pub fn low_risk_json() -> Value {
        json!({
            "cluster": 0,
            "cluster_description": "Low risk profile",
            "fraud_probability": 0.2,
            "is_fraud": false,
            "features_analysis": []
        })
    }

    /// Nested response as produced by the reference scoring service
    pub fn nested_medium_json() -> Value {
        json!({
            "risk_assessment": {
                "level": "Medium",
                "color": "#FFC107",
                "description": "Suspicious patterns requiring review",
                "action": "Manual review recommended",
                "probability": 0.6,
                "percentage": 60.0,
                "is_high_risk": false
            },
            "cluster_info": { "id": 1, "description": "Medium risk profile" },
            "risk_factors": ["Below average premium ($950.00)"],
            "input_features": { "age": 48.0, "witnesses": 2.0 }
        })
    }

    /// Error body returned when the model cannot be loaded
    pub fn model_unavailable_json() -> Value {
        json!({ "error": "Model unavailable" })
    }

    pub fn high_risk() -> PredictionResult {
        decode(Self::high_risk_json())
    }

    pub fn low_risk() -> PredictionResult {
        decode(Self::low_risk_json())
    }
}

fn decode(value: Value) -> PredictionResult {
    serde_json::from_value(value).expect("fixture is a valid prediction")
}
