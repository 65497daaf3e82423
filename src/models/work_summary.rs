//! Work summary model for a single evaluation period.
//!
//! A [`WorkSummary`] records how much work of each category an employee
//! performed in one period (week, month, or custom range), plus optional
//! per-period wage overrides entered by the operator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Quantities of work performed in one evaluation period, with optional
/// per-period wage overrides.
///
/// Overrides are modeled as `Option<Decimal>`: `None` means the operator
/// never touched the field and the profile rate applies, while `Some(0)`
/// is an intentionally-entered zero wage and is honored as-is. Value-based
/// fallback (treating zero as unset) would silently ignore a deliberate
/// zero override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkSummary {
    /// Regular days worked.
    #[serde(default, alias = "regular_day")]
    pub regular_days: Decimal,
    /// Regular hours worked.
    #[serde(default)]
    pub regular_hours: Decimal,
    /// Overtime days worked; meaningful when the overtime type is `Fixed`.
    #[serde(default, alias = "over_time_day")]
    pub overtime_days: Decimal,
    /// Overtime hours worked; meaningful when the overtime type is `Hourly`.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Half days worked.
    #[serde(default, alias = "half_day")]
    pub half_days: Decimal,
    /// Worked designated holidays.
    #[serde(default, alias = "holiday")]
    pub holidays: Decimal,
    /// Paid leave days taken.
    #[serde(default)]
    pub paid_leaves: Decimal,

    /// Per-period override for the regular wage.
    #[serde(default)]
    pub custom_regular_wage: Option<Decimal>,
    /// Per-period override for the overtime wage.
    #[serde(default)]
    pub custom_overtime_wage: Option<Decimal>,
    /// Per-period override for the half-day wage.
    #[serde(default)]
    pub custom_half_day_wage: Option<Decimal>,
    /// Per-period override for the holiday wage.
    #[serde(default)]
    pub custom_holiday_wage: Option<Decimal>,
    /// Per-period override for the paid-leave wage.
    #[serde(default)]
    pub custom_paid_leave_wage: Option<Decimal>,
}

impl WorkSummary {
    /// Validates that every quantity is non-negative and every override,
    /// when present, is non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        let quantities = [
            ("regular_days", self.regular_days),
            ("regular_hours", self.regular_hours),
            ("overtime_days", self.overtime_days),
            ("overtime_hours", self.overtime_hours),
            ("half_days", self.half_days),
            ("holidays", self.holidays),
            ("paid_leaves", self.paid_leaves),
        ];
        for (field, value) in quantities {
            if value < Decimal::ZERO {
                return Err(EngineError::NegativeQuantity {
                    field: field.to_string(),
                    value,
                });
            }
        }

        let overrides = [
            ("custom_regular_wage", self.custom_regular_wage),
            ("custom_overtime_wage", self.custom_overtime_wage),
            ("custom_half_day_wage", self.custom_half_day_wage),
            ("custom_holiday_wage", self.custom_holiday_wage),
            ("custom_paid_leave_wage", self.custom_paid_leave_wage),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                if value < Decimal::ZERO {
                    return Err(EngineError::NegativeRate {
                        field: field.to_string(),
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}
