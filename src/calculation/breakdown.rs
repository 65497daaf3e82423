//! Itemized wage breakdown calculation.
//!
//! This module computes the per-category payment breakdown for one
//! evaluation period: regular work, overtime, half days, worked holidays,
//! and paid leave, each at the effective rate (the per-period override when
//! the operator entered one, otherwise the profile rate).

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    EmployeeWageProfile, OvertimeType, PayCategory, PayLine, PaymentBreakdown, WorkSummary,
};

/// Computes the itemized payment breakdown for one period.
///
/// Every category is computed unconditionally; a category with zero
/// quantity contributes zero and is simply inactive for display. The total
/// is the exact decimal sum of the five line amounts with no intermediate
/// rounding.
///
/// The effective rate for each category is the summary's custom override
/// when present, otherwise the profile rate. An explicit `Some(0)` override
/// is honored as a zero wage.
///
/// Overtime is selected by the profile's overtime type:
/// - `Hourly` pays `overtime_hours * rate`; overtime days are ignored.
/// - `Fixed` pays `overtime_days * rate`; overtime hours are ignored.
/// - `NotAvailable` contributes nothing regardless of recorded quantities.
///
/// # Errors
///
/// Returns [`EngineError::NegativeQuantity`](crate::error::EngineError) or
/// [`EngineError::NegativeRate`](crate::error::EngineError) when the inputs
/// violate the non-negativity invariants.
///
/// # Examples
///
/// ```
/// use wage_ledger_engine::calculation::compute_breakdown;
/// use wage_ledger_engine::models::{EmployeeWageProfile, OvertimeType, WorkSummary};
/// use rust_decimal::Decimal;
///
/// let profile = EmployeeWageProfile {
///     regular_wage: Decimal::from(100),
///     overtime_wage: Decimal::from(50),
///     overtime_type: OvertimeType::Hourly,
///     half_day_rate: Decimal::ZERO,
///     holiday_rate: Decimal::ZERO,
///     paid_leave_rate: None,
/// };
/// let summary = WorkSummary {
///     regular_days: Decimal::from(20),
///     overtime_hours: Decimal::from(10),
///     ..WorkSummary::default()
/// };
///
/// let breakdown = compute_breakdown(&profile, &summary).unwrap();
/// assert_eq!(breakdown.total, Decimal::from(2500));
/// ```
pub fn compute_breakdown(
    profile: &EmployeeWageProfile,
    summary: &WorkSummary,
) -> EngineResult<PaymentBreakdown> {
    profile.validate()?;
    summary.validate()?;

    let regular_rate = summary.custom_regular_wage.unwrap_or(profile.regular_wage);
    let overtime_rate = summary.custom_overtime_wage.unwrap_or(profile.overtime_wage);
    let half_day_rate = summary.custom_half_day_wage.unwrap_or(profile.half_day_rate);
    let holiday_rate = summary.custom_holiday_wage.unwrap_or(profile.holiday_rate);
    let leave_rate = summary
        .custom_paid_leave_wage
        .unwrap_or_else(|| profile.effective_paid_leave_rate());

    let (overtime_quantity, overtime_rate) = match profile.overtime_type {
        OvertimeType::Hourly => (summary.overtime_hours, overtime_rate),
        OvertimeType::Fixed => (summary.overtime_days, overtime_rate),
        OvertimeType::NotAvailable => (Decimal::ZERO, Decimal::ZERO),
    };

    let lines = vec![
        make_line(PayCategory::Regular, summary.regular_days, regular_rate),
        make_line(PayCategory::Overtime, overtime_quantity, overtime_rate),
        make_line(PayCategory::HalfDay, summary.half_days, half_day_rate),
        make_line(PayCategory::Holiday, summary.holidays, holiday_rate),
        make_line(PayCategory::PaidLeave, summary.paid_leaves, leave_rate),
    ];
    let total = lines.iter().map(|l| l.amount).sum();

    Ok(PaymentBreakdown { lines, total })
}

fn make_line(category: PayCategory, quantity: Decimal, rate: Decimal) -> PayLine {
    PayLine {
        category,
        quantity,
        rate,
        amount: quantity * rate,
    }
}
