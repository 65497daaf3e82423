//! Payment transaction models.
//!
//! The [`PaymentTransaction`] is the output of a submitted payment
//! workflow. It is handed to an external backend for persistence; this
//! crate never stores it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a payment was made to the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash handover; no transaction reference exists.
    Cash,
    /// UPI transfer; requires a transaction reference.
    Upi,
    /// Bank transfer; requires a transaction reference.
    BankTransfer,
}

impl PaymentMethod {
    /// Returns true when this method produces a transaction reference that
    /// must be recorded.
    pub fn requires_transaction_id(&self) -> bool {
        matches!(self, PaymentMethod::Upi | PaymentMethod::BankTransfer)
    }
}

/// A settled payment for one employee and one evaluation period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTransaction {
    /// The employee the payment is for.
    pub employee_id: String,
    /// Start of the evaluation period (inclusive).
    pub period_start: NaiveDate,
    /// End of the evaluation period (inclusive).
    pub period_end: NaiveDate,
    /// The amount actually paid.
    #[serde(alias = "payed_amount")]
    pub paid_amount: Decimal,
    /// The engine-computed salary total for the period.
    #[serde(alias = "salary_amount")]
    pub computed_salary_amount: Decimal,
    /// How the payment was made.
    #[serde(alias = "payment_type")]
    pub payment_method: PaymentMethod,
    /// Transaction reference; present for electronic methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}
