//! Prediction results
//!
//! Decodes the response of `POST /api/predict`. Two document shapes are
//! accepted:
//!
//! ```text
//! flat:   { cluster, cluster_description, fraud_probability, is_fraud, features_analysis }
//! nested: { risk_assessment: {..}, cluster_info: { id, description }, risk_factors: [..] }
//! ```
//!
//! Both normalise into [`PredictionResult`]. Anything else fails to decode.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::risk::RiskLevel;

/// Cluster identifier assigned by the prediction service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClusterId {
    Number(i64),
    Label(String),
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterId::Number(number) => write!(f, "{number}"),
            ClusterId::Label(label) => f.write_str(label),
        }
    }
}

impl From<i64> for ClusterId {
    fn from(number: i64) -> Self {
        ClusterId::Number(number)
    }
}

/// Server-side risk assessment block of the nested response shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub description: String,
    pub action: String,
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    pub is_high_risk: bool,
}

/// Why a response body is not a usable prediction
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictionError {
    #[error("fraud probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),
}

/// Fraud assessment for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PredictionWire")]
pub struct PredictionResult {
    pub cluster: ClusterId,
    pub cluster_description: String,
    pub fraud_probability: f64,
    pub is_fraud: bool,
    /// Human readable risk factors, in the order the service gave them
    pub features_analysis: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<RiskAssessment>,
}

impl PredictionResult {
    /// `fraud_probability` as a percentage with two decimals, e.g. `87.34%`
    pub fn probability_percent(&self) -> String {
        format_percent(self.fraud_probability)
    }

    /// Risk band: the server's when it sent one, otherwise derived locally
    pub fn risk_level(&self) -> RiskLevel {
        self.assessment
            .as_ref()
            .map(|assessment| assessment.level)
            .unwrap_or_else(|| RiskLevel::from_probability(self.fraud_probability))
    }

    pub fn has_risk_factors(&self) -> bool {
        !self.features_analysis.is_empty()
    }
}

/// Formats a probability in [0, 1] as a two-decimal percentage.
///
/// Exact ties round away from zero (`0.125` becomes `0.13`), like a
/// browser's `toFixed(2)`.
pub fn format_percent(probability: f64) -> String {
    let percent = probability * 100.0;
    match Decimal::from_f64_retain(percent) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}%")
        }
        None => format!("{percent:.2}%"),
    }
}

#[derive(Deserialize)]
struct FlatPrediction {
    cluster: ClusterId,
    cluster_description: String,
    fraud_probability: f64,
    is_fraud: bool,
    #[serde(default)]
    features_analysis: Vec<String>,
    #[serde(default)]
    assessment: Option<RiskAssessment>,
}

#[derive(Deserialize)]
struct ClusterInfo {
    id: ClusterId,
    description: String,
}

#[derive(Deserialize)]
struct NestedPrediction {
    risk_assessment: RiskAssessment,
    cluster_info: ClusterInfo,
    #[serde(default)]
    risk_factors: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PredictionWire {
    Flat(FlatPrediction),
    Nested(NestedPrediction),
}

impl TryFrom<PredictionWire> for PredictionResult {
    type Error = PredictionError;

    fn try_from(wire: PredictionWire) -> Result<Self, Self::Error> {
        let result = match wire {
            PredictionWire::Flat(flat) => PredictionResult {
                cluster: flat.cluster,
                cluster_description: flat.cluster_description,
                fraud_probability: flat.fraud_probability,
                is_fraud: flat.is_fraud,
                features_analysis: flat.features_analysis,
                assessment: flat.assessment,
            },
            PredictionWire::Nested(nested) => PredictionResult {
                cluster: nested.cluster_info.id,
                cluster_description: nested.cluster_info.description,
                fraud_probability: nested.risk_assessment.probability,
                is_fraud: nested.risk_assessment.is_high_risk,
                features_analysis: nested.risk_factors,
                assessment: Some(nested.risk_assessment),
            },
        };

        let probability = result.fraud_probability;
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(PredictionError::ProbabilityOutOfRange(probability));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_shape() {
        let result: PredictionResult = serde_json::from_value(json!({
            "cluster": 2,
            "cluster_description": "High-risk cluster",
            "fraud_probability": 0.91,
            "is_fraud": true,
            "features_analysis": ["Unusual claim timing"]
        }))
        .unwrap();

        assert_eq!(result.cluster, ClusterId::Number(2));
        assert_eq!(result.probability_percent(), "91.00%");
        assert_eq!(result.features_analysis, vec!["Unusual claim timing"]);
        assert_eq!(result.risk_level(), RiskLevel::High);
        assert!(result.assessment.is_none());
    }

    #[test]
    fn test_missing_risk_factors_default_to_empty() {
        let result: PredictionResult = serde_json::from_value(json!({
            "cluster": "C-7",
            "cluster_description": "Mixed",
            "fraud_probability": 0.5,
            "is_fraud": false
        }))
        .unwrap();

        assert_eq!(result.cluster.to_string(), "C-7");
        assert!(!result.has_risk_factors());
    }

    #[test]
    fn test_nested_service_shape() {
        let result: PredictionResult = serde_json::from_value(json!({
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
            "risk_factors": ["Below average premium ($950.00)", "New customer (4.0 months)"],
            "input_features": { "age": 30.0 }
        }))
        .unwrap();

        assert_eq!(result.cluster, ClusterId::Number(1));
        assert_eq!(result.cluster_description, "Medium risk profile");
        assert!(!result.is_fraud);
        assert_eq!(result.probability_percent(), "60.00%");
        assert_eq!(result.features_analysis.len(), 2);
        assert_eq!(result.features_analysis[0], "Below average premium ($950.00)");
        assert_eq!(result.risk_level(), RiskLevel::Medium);
    }

    #[test]
    fn test_server_level_overrides_derived_level() {
        let result: PredictionResult = serde_json::from_value(json!({
            "risk_assessment": {
                "level": "High",
                "description": "High probability of fraudulent activity",
                "action": "Immediate investigation required",
                "probability": 0.2,
                "is_high_risk": true
            },
            "cluster_info": { "id": 2, "description": "High risk profile" }
        }))
        .unwrap();

        assert_eq!(result.risk_level(), RiskLevel::High);
    }

    #[test]
    fn test_rejects_foreign_shapes() {
        assert!(serde_json::from_value::<PredictionResult>(json!({"status": "ok"})).is_err());
        assert!(serde_json::from_value::<PredictionResult>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<PredictionResult>(json!({
            "cluster": 0,
            "cluster_description": "Low",
            "fraud_probability": "0.2",
            "is_fraud": false
        }))
        .is_err());
    }

    #[test]
    fn test_rejects_probability_outside_unit_interval() {
        let err = serde_json::from_value::<PredictionResult>(json!({
            "cluster": 0,
            "cluster_description": "Low",
            "fraud_probability": 1.2,
            "is_fraud": false
        }))
        .unwrap_err();
        assert!(err.to_string().contains("outside [0, 1]"));
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(format_percent(0.8734), "87.34%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(0.2), "20.00%");
    }

    #[test]
    fn test_percent_ties_round_up() {
        assert_eq!(format_percent(0.00125), "0.13%");
        assert_eq!(format_percent(0.5), "50.00%");
    }

    #[test]
    fn test_serialized_result_decodes_again() {
        let result: PredictionResult = serde_json::from_value(json!({
            "cluster": 0,
            "cluster_description": "Low risk profile",
            "fraud_probability": 0.2,
            "is_fraud": false,
            "features_analysis": []
        }))
        .unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(serde_json::from_value::<PredictionResult>(json).unwrap(), result);
    }
}
