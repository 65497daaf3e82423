//! Employee wage profile model and related types.
//!
//! This module defines the per-employee wage configuration consumed by the
//! breakdown calculation: base rates for each pay category and the overtime
//! compensation scheme.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How overtime work is compensated for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeType {
    /// Overtime is not compensated; overtime quantities contribute nothing.
    NotAvailable,
    /// Overtime is compensated per hour worked beyond schedule.
    Hourly,
    /// Overtime is compensated as a flat per-day amount.
    Fixed,
}

/// The wage configuration for a single employee.
///
/// All rates are non-negative decimals. A rate absent from the source data
/// deserializes to zero rather than a null that could propagate into
/// arithmetic; the paid-leave rate is the one deliberate optional, falling
/// back to the regular rate when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWageProfile {
    /// Pay per regular unit of work (hour or day, per the contract).
    #[serde(default, alias = "wage_hour")]
    pub regular_wage: Decimal,
    /// Pay per overtime unit (hour or day, selected by `overtime_type`).
    #[serde(default, alias = "wage_overtime")]
    pub overtime_wage: Decimal,
    /// The overtime compensation scheme.
    pub overtime_type: OvertimeType,
    /// Flat rate for a half day worked.
    #[serde(default)]
    pub half_day_rate: Decimal,
    /// Rate for a worked designated holiday.
    #[serde(default)]
    pub holiday_rate: Decimal,
    /// Rate for a paid leave day; defaults to `regular_wage` when unset.
    #[serde(default)]
    pub paid_leave_rate: Option<Decimal>,
}

impl EmployeeWageProfile {
    /// Returns the effective paid-leave rate, falling back to the regular
    /// wage when no explicit rate is configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_ledger_engine::models::{EmployeeWageProfile, OvertimeType};
    /// use rust_decimal::Decimal;
    ///
    /// let profile = EmployeeWageProfile {
    ///     regular_wage: Decimal::from(100),
    ///     overtime_wage: Decimal::from(50),
    ///     overtime_type: OvertimeType::Hourly,
    ///     half_day_rate: Decimal::from(60),
    ///     holiday_rate: Decimal::from(150),
    ///     paid_leave_rate: None,
    /// };
    /// assert_eq!(profile.effective_paid_leave_rate(), Decimal::from(100));
    /// ```
    pub fn effective_paid_leave_rate(&self) -> Decimal {
        self.paid_leave_rate.unwrap_or(self.regular_wage)
    }

    /// Validates that every configured rate is non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("regular_wage", self.regular_wage),
            ("overtime_wage", self.overtime_wage),
            ("half_day_rate", self.half_day_rate),
            ("holiday_rate", self.holiday_rate),
        ];
        for (field, value) in fields {
            if value < Decimal::ZERO {
                return Err(EngineError::NegativeRate {
                    field: field.to_string(),
                    value,
                });
            }
        }
        if let Some(rate) = self.paid_leave_rate {
            if rate < Decimal::ZERO {
                return Err(EngineError::NegativeRate {
                    field: "paid_leave_rate".to_string(),
                    value: rate,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile() -> EmployeeWageProfile {
        EmployeeWageProfile {
            regular_wage: Decimal::from(100),
            overtime_wage: Decimal::from(50),
            overtime_type: OvertimeType::Hourly,
            half_day_rate: Decimal::from(60),
            holiday_rate: Decimal::from(150),
            paid_leave_rate: None,
        }
    }

    #[test]
    fn test_deserialize_profile_with_legacy_field_names() {
        let json = r#"{
            "wage_hour": "100",
            "wage_overtime": "50",
            "overtime_type": "hourly",
            "half_day_rate": "60",
            "holiday_rate": "150"
        }"#;

        let profile: EmployeeWageProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.regular_wage, Decimal::from(100));
        assert_eq!(profile.overtime_wage, Decimal::from(50));
        assert_eq!(profile.overtime_type, OvertimeType::Hourly);
        assert_eq!(profile.paid_leave_rate, None);
    }

    #[test]
    fn test_absent_rates_deserialize_to_zero() {
        let json = r#"{"overtime_type": "not_available"}"#;

        let profile: EmployeeWageProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.regular_wage, Decimal::ZERO);
        assert_eq!(profile.overtime_wage, Decimal::ZERO);
        assert_eq!(profile.half_day_rate, Decimal::ZERO);
        assert_eq!(profile.holiday_rate, Decimal::ZERO);
    }

    #[test]
    fn test_overtime_type_serialization() {
        assert_eq!(
            serde_json::to_string(&OvertimeType::NotAvailable).unwrap(),
            "\"not_available\""
        );
        assert_eq!(
            serde_json::to_string(&OvertimeType::Hourly).unwrap(),
            "\"hourly\""
        );
        assert_eq!(
            serde_json::to_string(&OvertimeType::Fixed).unwrap(),
            "\"fixed\""
        );
    }

    #[test]
    fn test_effective_paid_leave_rate_falls_back_to_regular() {
        let profile = create_test_profile();
        assert_eq!(profile.effective_paid_leave_rate(), Decimal::from(100));
    }

    #[test]
    fn test_effective_paid_leave_rate_honors_explicit_rate() {
        let mut profile = create_test_profile();
        profile.paid_leave_rate = Some(Decimal::from(80));
        assert_eq!(profile.effective_paid_leave_rate(), Decimal::from(80));
    }

    #[test]
    fn test_explicit_zero_paid_leave_rate_is_honored() {
        let mut profile = create_test_profile();
        profile.paid_leave_rate = Some(Decimal::ZERO);
        assert_eq!(profile.effective_paid_leave_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_validate_accepts_non_negative_rates() {
        assert!(create_test_profile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut profile = create_test_profile();
        profile.holiday_rate = Decimal::from(-1);

        match profile.validate().unwrap_err() {
            EngineError::NegativeRate { field, value } => {
                assert_eq!(field, "holiday_rate");
                assert_eq!(value, Decimal::from(-1));
            }
            other => panic!("Expected NegativeRate, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_paid_leave_rate() {
        let mut profile = create_test_profile();
        profile.paid_leave_rate = Some(Decimal::from(-5));
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let profile = create_test_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: EmployeeWageProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, deserialized);
    }
}
