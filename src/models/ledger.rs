//! Per-employee credit/debit ledger balance.
//!
//! The ledger carries over/under payments across evaluation periods as a
//! pair of non-negative fields: `credit` is owed *to* the employee
//! (overpayment carried forward), `debit` is owed *by* the employee
//! (underpayment or advance).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A carried-forward payment balance for one employee.
///
/// Invariant: at any settled point at most one of `credit` and `debit` is
/// non-zero. [`crate::calculation::settle_ledger`] preserves this by
/// draining one side before growing the other; a dual-positive pair coming
/// from manual data edits is netted before settlement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerBalance {
    /// Amount owed to the employee.
    #[serde(default)]
    pub credit: Decimal,
    /// Amount owed by the employee.
    #[serde(default)]
    pub debit: Decimal,
}

impl LedgerBalance {
    /// A zero balance.
    pub const ZERO: LedgerBalance = LedgerBalance {
        credit: Decimal::ZERO,
        debit: Decimal::ZERO,
    };

    /// Creates a balance from credit and debit amounts.
    pub fn new(credit: Decimal, debit: Decimal) -> Self {
        Self { credit, debit }
    }

    /// Returns the single signed balance: positive when the employee is
    /// owed money, negative when the employee owes money.
    pub fn net(&self) -> Decimal {
        self.credit - self.debit
    }

    /// Returns true when at most one side is non-zero.
    pub fn is_normalized(&self) -> bool {
        self.credit == Decimal::ZERO || self.debit == Decimal::ZERO
    }

    /// Nets a dual-positive pair down to a single non-zero side.
    ///
    /// A balance that is already normalized is returned unchanged.
    pub fn normalized(&self) -> LedgerBalance {
        let net = self.net();
        if net >= Decimal::ZERO {
            LedgerBalance::new(net, Decimal::ZERO)
        } else {
            LedgerBalance::new(Decimal::ZERO, -net)
        }
    }

    /// Validates that both sides are non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.credit < Decimal::ZERO {
            return Err(EngineError::NegativeBalance {
                side: "credit".to_string(),
                value: self.credit,
            });
        }
        if self.debit < Decimal::ZERO {
            return Err(EngineError::NegativeBalance {
                side: "debit".to_string(),
                value: self.debit,
            });
        }
        Ok(())
    }
}
