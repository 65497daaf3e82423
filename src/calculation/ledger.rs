//! Credit/debit ledger settlement.
//!
//! This is the piece-rate settlement algorithm: after a period's payment is
//! recorded, the difference between the total due and the amount paid is
//! folded into the employee's carried-forward credit/debit balance. An
//! underpayment consumes any existing credit before growing the debit; an
//! overpayment consumes any existing debit before growing the credit.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::LedgerBalance;

/// Settles a period's payment against the carried-forward ledger balance.
///
/// `pending = total_due - paid_amount` may be positive (underpaid),
/// negative (overpaid), or zero. The returned balance always has both
/// sides non-negative, and only one side ever grows in a single call: the
/// opposite side drains first. A zero pending leaves the balance
/// untouched.
///
/// A balance with both sides positive on entry (possible only through
/// manual data edits upstream) is netted to a single signed balance before
/// settlement, so the normalization invariant holds on exit regardless of
/// the input. A negative `paid_amount` is treated as no payment.
///
/// # Errors
///
/// Returns [`EngineError::NegativeBalance`](crate::error::EngineError) when
/// either incoming side is negative, and
/// [`EngineError::NegativeAmount`](crate::error::EngineError) when
/// `total_due` is negative.
///
/// # Examples
///
/// ```
/// use wage_ledger_engine::calculation::settle_ledger;
/// use wage_ledger_engine::models::LedgerBalance;
/// use rust_decimal::Decimal;
///
/// // Overpaid by 200: the credit grows.
/// let settled = settle_ledger(
///     LedgerBalance::ZERO,
///     Decimal::from(1000),
///     Decimal::from(1200),
/// ).unwrap();
/// assert_eq!(settled.credit, Decimal::from(200));
/// assert_eq!(settled.debit, Decimal::ZERO);
/// ```
pub fn settle_ledger(
    balance: LedgerBalance,
    total_due: Decimal,
    paid_amount: Decimal,
) -> EngineResult<LedgerBalance> {
    balance.validate()?;
    if total_due < Decimal::ZERO {
        return Err(EngineError::NegativeAmount {
            field: "total_due".to_string(),
            value: total_due,
        });
    }
    let mut balance = balance.normalized();

    let paid = paid_amount.max(Decimal::ZERO);
    let pending = total_due - paid;

    if pending > Decimal::ZERO {
        // Underpaid: consume credit first, then grow debit.
        let used = balance.credit.min(pending);
        balance.credit -= used;
        balance.debit += pending - used;
    } else if pending < Decimal::ZERO {
        // Overpaid: consume debit first, then grow credit.
        let overpaid = -pending;
        let reduced = balance.debit.min(overpaid);
        balance.debit -= reduced;
        balance.credit += overpaid - reduced;
    }

    Ok(balance)
}
