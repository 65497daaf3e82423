//! Pending-payment calculation.

use rust_decimal::Decimal;

/// Computes the shortfall between the computed total and the amount paid.
///
/// A negative `paid_amount` is clamped to zero before use (a negative
/// entered payment is treated as "no payment"), and the result never goes
/// below zero: an overpayment yields a pending amount of zero rather than
/// a negative figure. Overpayments are carried through the ledger by
/// [`settle_ledger`](crate::calculation::settle_ledger), not here.
///
/// # Examples
///
/// ```
/// use wage_ledger_engine::calculation::compute_pending;
/// use rust_decimal::Decimal;
///
/// let pending = compute_pending(Decimal::from(2500), Decimal::from(2000));
/// assert_eq!(pending, Decimal::from(500));
/// ```
pub fn compute_pending(total: Decimal, paid_amount: Decimal) -> Decimal {
    let paid = paid_amount.max(Decimal::ZERO);
    (total - paid).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpayment_yields_shortfall() {
        assert_eq!(
            compute_pending(Decimal::from(2500), Decimal::from(2000)),
            Decimal::from(500)
        );
    }

    #[test]
    fn test_exact_payment_yields_zero() {
        assert_eq!(
            compute_pending(Decimal::from(1000), Decimal::from(1000)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_overpayment_clamps_to_zero() {
        assert_eq!(
            compute_pending(Decimal::from(1000), Decimal::from(1200)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_negative_paid_amount_treated_as_no_payment() {
        assert_eq!(
            compute_pending(Decimal::from(800), Decimal::from(-300)),
            Decimal::from(800)
        );
    }

    #[test]
    fn test_zero_total_zero_paid() {
        assert_eq!(compute_pending(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }
}
