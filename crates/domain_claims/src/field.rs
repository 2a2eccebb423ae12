//! Claim form field catalogue
//!
//! The claim form collects exactly sixteen numeric attributes. Each one has a
//! wire key (the JSON key the prediction service expects), a human label, and
//! an input constraint that a number input would enforce.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClaimFormError;

/// Earliest accepted vehicle model year
pub const EARLIEST_AUTO_YEAR: i64 = 1900;

/// One of the sixteen claim attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimField {
    MonthsAsCustomer,
    Age,
    PolicyDeductable,
    PolicyAnnualPremium,
    UmbrellaLimit,
    #[serde(rename = "capital-gains")]
    CapitalGains,
    #[serde(rename = "capital-loss")]
    CapitalLoss,
    IncidentHourOfTheDay,
    NumberOfVehiclesInvolved,
    BodilyInjuries,
    Witnesses,
    TotalClaimAmount,
    InjuryClaim,
    PropertyClaim,
    VehicleClaim,
    AutoYear,
}

/// Whether a field takes whole numbers or decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Integer,
    Decimal,
}

/// Input constraint attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConstraint {
    pub kind: NumericKind,
    pub min: Decimal,
    pub max: Option<Decimal>,
    /// Step grid anchored at `min`
    pub step: Option<Decimal>,
}

impl FieldConstraint {
    const fn integer(min: Decimal, max: Option<Decimal>) -> Self {
        Self { kind: NumericKind::Integer, min, max, step: None }
    }

    const fn decimal(step: Option<Decimal>) -> Self {
        Self { kind: NumericKind::Decimal, min: Decimal::ZERO, max: None, step }
    }

    /// Short description shown next to a prompt, e.g. `integer, 18 to 100`
    pub fn hint(&self) -> String {
        let kind = match self.kind {
            NumericKind::Integer => "integer",
            NumericKind::Decimal => "number",
        };
        let mut hint = match self.max {
            Some(max) => format!("{kind}, {} to {}", self.min, max),
            None => format!("{kind} >= {}", self.min),
        };
        if let Some(step) = self.step {
            hint.push_str(&format!(", step {step}"));
        }
        hint
    }
}

impl ClaimField {
    /// Number of fields on the form
    pub const COUNT: usize = 16;

    /// Every field, in form order
    pub const ALL: [ClaimField; ClaimField::COUNT] = [
        ClaimField::MonthsAsCustomer,
        ClaimField::Age,
        ClaimField::PolicyDeductable,
        ClaimField::PolicyAnnualPremium,
        ClaimField::UmbrellaLimit,
        ClaimField::CapitalGains,
        ClaimField::CapitalLoss,
        ClaimField::IncidentHourOfTheDay,
        ClaimField::NumberOfVehiclesInvolved,
        ClaimField::BodilyInjuries,
        ClaimField::Witnesses,
        ClaimField::TotalClaimAmount,
        ClaimField::InjuryClaim,
        ClaimField::PropertyClaim,
        ClaimField::VehicleClaim,
        ClaimField::AutoYear,
    ];

    /// Position of the field in [`ClaimField::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The JSON key used on the wire
    pub fn name(self) -> &'static str {
        match self {
            ClaimField::MonthsAsCustomer => "months_as_customer",
            ClaimField::Age => "age",
            ClaimField::PolicyDeductable => "policy_deductable",
            ClaimField::PolicyAnnualPremium => "policy_annual_premium",
            ClaimField::UmbrellaLimit => "umbrella_limit",
            ClaimField::CapitalGains => "capital-gains",
            ClaimField::CapitalLoss => "capital-loss",
            ClaimField::IncidentHourOfTheDay => "incident_hour_of_the_day",
            ClaimField::NumberOfVehiclesInvolved => "number_of_vehicles_involved",
            ClaimField::BodilyInjuries => "bodily_injuries",
            ClaimField::Witnesses => "witnesses",
            ClaimField::TotalClaimAmount => "total_claim_amount",
            ClaimField::InjuryClaim => "injury_claim",
            ClaimField::PropertyClaim => "property_claim",
            ClaimField::VehicleClaim => "vehicle_claim",
            ClaimField::AutoYear => "auto_year",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            ClaimField::MonthsAsCustomer => "Months as Customer",
            ClaimField::Age => "Age",
            ClaimField::PolicyDeductable => "Policy Deductible ($)",
            ClaimField::PolicyAnnualPremium => "Annual Premium ($)",
            ClaimField::UmbrellaLimit => "Umbrella Limit ($)",
            ClaimField::CapitalGains => "Capital Gains ($)",
            ClaimField::CapitalLoss => "Capital Loss ($)",
            ClaimField::IncidentHourOfTheDay => "Incident Hour (0-23)",
            ClaimField::NumberOfVehiclesInvolved => "Vehicles Involved",
            ClaimField::BodilyInjuries => "Bodily Injuries",
            ClaimField::Witnesses => "Witnesses",
            ClaimField::TotalClaimAmount => "Total Claim Amount ($)",
            ClaimField::InjuryClaim => "Injury Claim ($)",
            ClaimField::PropertyClaim => "Property Claim ($)",
            ClaimField::VehicleClaim => "Vehicle Claim ($)",
            ClaimField::AutoYear => "Auto Year",
        }
    }

    /// Constraint for this field, with `auto_year` capped at the current year
    pub fn constraint(self) -> FieldConstraint {
        self.constraint_for_year(current_year())
    }

    /// Constraint for this field, with `auto_year` capped at `current_year`
    pub fn constraint_for_year(self, current_year: i32) -> FieldConstraint {
        let cents = Some(dec!(0.01));
        match self {
            ClaimField::MonthsAsCustomer => FieldConstraint::integer(Decimal::ZERO, None),
            ClaimField::Age => FieldConstraint::integer(dec!(18), Some(dec!(100))),
            ClaimField::PolicyDeductable => FieldConstraint::decimal(Some(dec!(100))),
            ClaimField::PolicyAnnualPremium => FieldConstraint::decimal(cents),
            ClaimField::UmbrellaLimit => FieldConstraint::decimal(None),
            ClaimField::CapitalGains => FieldConstraint::decimal(None),
            ClaimField::CapitalLoss => FieldConstraint::decimal(None),
            ClaimField::IncidentHourOfTheDay => {
                FieldConstraint::integer(Decimal::ZERO, Some(dec!(23)))
            }
            ClaimField::NumberOfVehiclesInvolved => {
                FieldConstraint::integer(Decimal::ONE, Some(dec!(10)))
            }
            ClaimField::BodilyInjuries => FieldConstraint::integer(Decimal::ZERO, Some(dec!(10))),
            ClaimField::Witnesses => FieldConstraint::integer(Decimal::ZERO, Some(dec!(10))),
            ClaimField::TotalClaimAmount => FieldConstraint::decimal(cents),
            ClaimField::InjuryClaim => FieldConstraint::decimal(cents),
            ClaimField::PropertyClaim => FieldConstraint::decimal(cents),
            ClaimField::VehicleClaim => FieldConstraint::decimal(cents),
            ClaimField::AutoYear => FieldConstraint::integer(
                Decimal::from(EARLIEST_AUTO_YEAR),
                Some(Decimal::from(current_year)),
            ),
        }
    }

    /// Looks a field up by its Rust identifier (`capital_gains`)
    pub(crate) fn from_ident(ident: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().replace('-', "_") == ident)
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClaimField {
    type Err = ClaimFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ClaimFormError::UnknownField(s.to_string()))
    }
}

/// The current calendar year (UTC)
pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order_matches_index() {
        for (position, field) in ClaimField::ALL.iter().enumerate() {
            assert_eq!(field.index(), position);
        }
    }

    #[test]
    fn test_wire_names_round_trip() {
        for field in ClaimField::ALL {
            assert_eq!(field.name().parse::<ClaimField>().unwrap(), field);
        }
        assert_eq!("capital-gains".parse::<ClaimField>().unwrap(), ClaimField::CapitalGains);
        assert!("capital_gains".parse::<ClaimField>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&ClaimField::CapitalLoss).unwrap();
        assert_eq!(json, "\"capital-loss\"");
        let json = serde_json::to_string(&ClaimField::IncidentHourOfTheDay).unwrap();
        assert_eq!(json, "\"incident_hour_of_the_day\"");
    }

    #[test]
    fn test_ident_lookup() {
        assert_eq!(ClaimField::from_ident("capital_gains"), Some(ClaimField::CapitalGains));
        assert_eq!(ClaimField::from_ident("age"), Some(ClaimField::Age));
        assert_eq!(ClaimField::from_ident("capital-gains"), None);
    }

    #[test]
    fn test_auto_year_capped_at_given_year() {
        let constraint = ClaimField::AutoYear.constraint_for_year(2026);
        assert_eq!(constraint.min, dec!(1900));
        assert_eq!(constraint.max, Some(dec!(2026)));
        assert_eq!(constraint.kind, NumericKind::Integer);
    }

    #[test]
    fn test_hints() {
        assert_eq!(ClaimField::Age.constraint().hint(), "integer, 18 to 100");
        assert_eq!(
            ClaimField::PolicyDeductable.constraint().hint(),
            "number >= 0, step 100"
        );
        assert_eq!(
            ClaimField::VehicleClaim.constraint().hint(),
            "number >= 0, step 0.01"
        );
    }
}
