//! Payment breakdown models.
//!
//! This module contains the [`PaymentBreakdown`] type and its associated
//! structures capturing the itemized output of a wage calculation: one pay
//! line per category plus the exact total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_to_minor_unit;

/// The category of pay for a pay line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Normally scheduled work at the base rate.
    Regular,
    /// Work beyond schedule, hourly or per-day per the overtime type.
    Overtime,
    /// A day worked at reduced duration, at a flat rate.
    HalfDay,
    /// A worked day falling on a designated holiday.
    Holiday,
    /// A compensated absence.
    PaidLeave,
}

/// A single line item in a payment breakdown.
///
/// Each pay line captures the quantity of work in one category, the
/// effective rate applied (profile rate or per-period override), and the
/// resulting amount.
///
/// # Example
///
/// ```
/// use wage_ledger_engine::models::{PayCategory, PayLine};
/// use rust_decimal::Decimal;
///
/// let line = PayLine {
///     category: PayCategory::Regular,
///     quantity: Decimal::from(20),
///     rate: Decimal::from(100),
///     amount: Decimal::from(2000),
/// };
/// assert!(line.is_active());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The category of pay.
    pub category: PayCategory,
    /// The number of units (days or hours) in this category.
    pub quantity: Decimal,
    /// The effective rate per unit.
    pub rate: Decimal,
    /// The total amount for this line (quantity * rate), exact.
    pub amount: Decimal,
}

impl PayLine {
    /// Returns true when this line has a non-zero quantity.
    ///
    /// Every category is always computed; activity only governs whether a
    /// consuming UI displays the line.
    pub fn is_active(&self) -> bool {
        self.quantity > Decimal::ZERO
    }
}

/// The itemized result of a wage calculation for one period.
///
/// The total is the exact decimal sum of the five line amounts. No rounding
/// happens inside the breakdown; [`PaymentBreakdown::rounded_total`] rounds
/// once at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// One line per pay category, in category order.
    pub lines: Vec<PayLine>,
    /// The exact total of all line amounts.
    pub total: Decimal,
}

impl PaymentBreakdown {
    /// Returns the line for the given category.
    pub fn line(&self, category: PayCategory) -> Option<&PayLine> {
        self.lines.iter().find(|l| l.category == category)
    }

    /// Returns the lines with non-zero quantities, for display.
    pub fn active_lines(&self) -> Vec<&PayLine> {
        self.lines.iter().filter(|l| l.is_active()).collect()
    }

    /// Returns the total rounded to the currency minor unit.
    pub fn rounded_total(&self, scale: u32) -> Decimal {
        round_to_minor_unit(self.total, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(category: PayCategory, quantity: i64, rate: i64) -> PayLine {
        let quantity = Decimal::from(quantity);
        let rate = Decimal::from(rate);
        PayLine {
            category,
            quantity,
            rate,
            amount: quantity * rate,
        }
    }

    fn create_test_breakdown() -> PaymentBreakdown {
        let lines = vec![
            line(PayCategory::Regular, 20, 100),
            line(PayCategory::Overtime, 10, 50),
            line(PayCategory::HalfDay, 0, 60),
            line(PayCategory::Holiday, 0, 150),
            line(PayCategory::PaidLeave, 1, 100),
        ];
        let total = lines.iter().map(|l| l.amount).sum();
        PaymentBreakdown { lines, total }
    }

    #[test]
    fn test_line_lookup_by_category() {
        let breakdown = create_test_breakdown();
        let overtime = breakdown.line(PayCategory::Overtime).unwrap();
        assert_eq!(overtime.amount, Decimal::from(500));
    }

    #[test]
    fn test_active_lines_excludes_zero_quantities() {
        let breakdown = create_test_breakdown();
        let active = breakdown.active_lines();
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|l| l.quantity > Decimal::ZERO));
    }

    #[test]
    fn test_zero_quantity_line_is_inactive_even_with_rate() {
        let breakdown = create_test_breakdown();
        let holiday = breakdown.line(PayCategory::Holiday).unwrap();
        assert_eq!(holiday.rate, Decimal::from(150));
        assert!(!holiday.is_active());
    }

    #[test]
    fn test_rounded_total_rounds_half_up() {
        let lines = vec![PayLine {
            category: PayCategory::Regular,
            quantity: Decimal::new(15, 1),  // 1.5
            rate: Decimal::new(337, 2),     // 3.37
            amount: Decimal::new(5055, 3),  // 5.055
        }];
        let breakdown = PaymentBreakdown {
            total: Decimal::new(5055, 3),
            lines,
        };
        assert_eq!(breakdown.rounded_total(2), Decimal::new(506, 2)); // 5.06
    }

    #[test]
    fn test_serialize_round_trip() {
        let breakdown = create_test_breakdown();
        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: PaymentBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, deserialized);
    }

    #[test]
    fn test_pay_category_serialization() {
        assert_eq!(
            serde_json::to_string(&PayCategory::HalfDay).unwrap(),
            "\"half_day\""
        );
        assert_eq!(
            serde_json::to_string(&PayCategory::PaidLeave).unwrap(),
            "\"paid_leave\""
        );
    }
}
