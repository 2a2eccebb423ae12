//! Claim submission wire record
//!
//! The explicit request schema for `POST /api/predict`. Every value travels as
//! the text the user typed; the prediction service does its own coercion.

use serde::{Deserialize, Serialize};

use crate::field::ClaimField;

/// JSON body of a prediction request: exactly the sixteen claim fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClaimSubmission {
    pub months_as_customer: String,
    pub age: String,
    pub policy_deductable: String,
    pub policy_annual_premium: String,
    pub umbrella_limit: String,
    #[serde(rename = "capital-gains")]
    pub capital_gains: String,
    #[serde(rename = "capital-loss")]
    pub capital_loss: String,
    pub incident_hour_of_the_day: String,
    pub number_of_vehicles_involved: String,
    pub bodily_injuries: String,
    pub witnesses: String,
    pub total_claim_amount: String,
    pub injury_claim: String,
    pub property_claim: String,
    pub vehicle_claim: String,
    pub auto_year: String,
}

impl ClaimSubmission {
    /// Returns the value held for a field
    pub fn get(&self, field: ClaimField) -> &str {
        self.slot(field)
    }

    /// Replaces the value held for a field
    pub fn set(&mut self, field: ClaimField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    fn slot(&self, field: ClaimField) -> &String {
        match field {
            ClaimField::MonthsAsCustomer => &self.months_as_customer,
            ClaimField::Age => &self.age,
            ClaimField::PolicyDeductable => &self.policy_deductable,
            ClaimField::PolicyAnnualPremium => &self.policy_annual_premium,
            ClaimField::UmbrellaLimit => &self.umbrella_limit,
            ClaimField::CapitalGains => &self.capital_gains,
            ClaimField::CapitalLoss => &self.capital_loss,
            ClaimField::IncidentHourOfTheDay => &self.incident_hour_of_the_day,
            ClaimField::NumberOfVehiclesInvolved => &self.number_of_vehicles_involved,
            ClaimField::BodilyInjuries => &self.bodily_injuries,
            ClaimField::Witnesses => &self.witnesses,
            ClaimField::TotalClaimAmount => &self.total_claim_amount,
            ClaimField::InjuryClaim => &self.injury_claim,
            ClaimField::PropertyClaim => &self.property_claim,
            ClaimField::VehicleClaim => &self.vehicle_claim,
            ClaimField::AutoYear => &self.auto_year,
        }
    }

    fn slot_mut(&mut self, field: ClaimField) -> &mut String {
        match field {
            ClaimField::MonthsAsCustomer => &mut self.months_as_customer,
            ClaimField::Age => &mut self.age,
            ClaimField::PolicyDeductable => &mut self.policy_deductable,
            ClaimField::PolicyAnnualPremium => &mut self.policy_annual_premium,
            ClaimField::UmbrellaLimit => &mut self.umbrella_limit,
            ClaimField::CapitalGains => &mut self.capital_gains,
            ClaimField::CapitalLoss => &mut self.capital_loss,
            ClaimField::IncidentHourOfTheDay => &mut self.incident_hour_of_the_day,
            ClaimField::NumberOfVehiclesInvolved => &mut self.number_of_vehicles_involved,
            ClaimField::BodilyInjuries => &mut self.bodily_injuries,
            ClaimField::Witnesses => &mut self.witnesses,
            ClaimField::TotalClaimAmount => &mut self.total_claim_amount,
            ClaimField::InjuryClaim => &mut self.injury_claim,
            ClaimField::PropertyClaim => &mut self.property_claim,
            ClaimField::VehicleClaim => &mut self.vehicle_claim,
            ClaimField::AutoYear => &mut self.auto_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> ClaimSubmission {
        let mut submission = ClaimSubmission::default();
        for field in ClaimField::ALL {
            submission.set(field, field.index().to_string());
        }
        submission
    }

    #[test]
    fn test_serializes_exactly_the_wire_keys() {
        let value = serde_json::to_value(numbered()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), ClaimField::COUNT);
        for field in ClaimField::ALL {
            assert_eq!(
                object.get(field.name()).and_then(|v| v.as_str()),
                Some(field.index().to_string().as_str()),
                "value for {field}"
            );
        }
    }

    #[test]
    fn test_values_stay_strings() {
        let mut submission = numbered();
        submission.set(ClaimField::PolicyAnnualPremium, "1406.91");
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["policy_annual_premium"], serde_json::json!("1406.91"));
    }

    #[test]
    fn test_rejects_unknown_and_missing_keys() {
        let mut value = serde_json::to_value(numbered()).unwrap();
        value["fraud_reported"] = serde_json::json!("Y");
        assert!(serde_json::from_value::<ClaimSubmission>(value).is_err());

        let mut value = serde_json::to_value(numbered()).unwrap();
        value.as_object_mut().unwrap().remove("auto_year");
        assert!(serde_json::from_value::<ClaimSubmission>(value).is_err());
    }
}
