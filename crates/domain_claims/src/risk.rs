//! Risk levels derived from a fraud probability

use serde::{Deserialize, Serialize};
use std::fmt;

/// Probabilities below this are low risk
pub const LOW_RISK_THRESHOLD: f64 = 0.3;
/// Probabilities below this (and at least low) are medium risk
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.7;

/// Coarse risk band shown alongside the fraud probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Buckets a probability in [0, 1]
    pub fn from_probability(probability: f64) -> Self {
        if probability < LOW_RISK_THRESHOLD {
            RiskLevel::Low
        } else if probability < MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskLevel::Low => "Normal claim behavior detected",
            RiskLevel::Medium => "Suspicious patterns requiring review",
            RiskLevel::High => "High probability of fraudulent activity",
        }
    }

    /// Recommended follow-up for a claim in this band
    pub fn action(self) -> &'static str {
        match self {
            RiskLevel::Low => "No additional review needed",
            RiskLevel::Medium => "Manual review recommended",
            RiskLevel::High => "Immediate investigation required",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.2999), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.3), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.6999), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.7), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(1.0), RiskLevel::High);
    }

    #[test]
    fn test_serde_names_match_service() {
        let level: RiskLevel = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(level, RiskLevel::Medium);
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"High\"");
    }
}
