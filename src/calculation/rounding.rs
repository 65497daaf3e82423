//! Presentation-boundary rounding.
//!
//! All internal arithmetic in the engine is exact decimal. Rounding happens
//! exactly once, at the display/persistence boundary, through
//! [`round_to_minor_unit`]. The rule is round-half-up (midpoint away from
//! zero) to the currency's minor unit.

use rust_decimal::{Decimal, RoundingStrategy};

/// The minor-unit scale used by default: 2 decimal places.
pub const DEFAULT_MINOR_UNIT_SCALE: u32 = 2;

/// Rounds an amount to `scale` decimal places, half-up.
///
/// # Examples
///
/// ```
/// use wage_ledger_engine::calculation::round_to_minor_unit;
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(25005, 4); // 2.5005
/// assert_eq!(round_to_minor_unit(amount, 2), Decimal::new(250, 2)); // 2.50
///
/// let midpoint = Decimal::new(2505, 3); // 2.505
/// assert_eq!(round_to_minor_unit(midpoint, 2), Decimal::new(251, 2)); // 2.51
/// ```
pub fn round_to_minor_unit(amount: Decimal, scale: u32) -> Decimal {
    amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}
