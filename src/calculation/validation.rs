//! Payment-submission validation.
//!
//! Validation findings are structured values, not errors: the operator is
//! shown every failing field before submission, and a finding never aborts
//! control flow inside the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PaymentMethod;

/// The operator-entered fields of a payment about to be submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSubmission {
    /// The selected payment method, if any.
    #[serde(default, alias = "payment_type")]
    pub method: Option<PaymentMethod>,
    /// The transaction reference entered by the operator.
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// The amount being paid.
    #[serde(default, alias = "payed_amount")]
    pub paid_amount: Decimal,
}

/// A single validation finding on a payment submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    /// No payment method was selected.
    MissingPaymentMethod,
    /// An electronic method was selected but no transaction reference was
    /// entered.
    MissingTransactionId,
    /// The entered paid amount is negative.
    NegativePaidAmount,
}

impl ValidationIssue {
    /// A human-readable message naming the failing field.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationIssue::MissingPaymentMethod => "A payment method must be selected",
            ValidationIssue::MissingTransactionId => {
                "A transaction ID is required for UPI and bank transfer payments"
            }
            ValidationIssue::NegativePaidAmount => "The paid amount cannot be negative",
        }
    }
}

/// The outcome of validating a payment submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    issues: Vec<ValidationIssue>,
}

impl ValidationOutcome {
    /// Returns true when no findings were raised.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The findings, in evaluation order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }
}

/// Validates a payment submission before it is handed to the backend.
///
/// Rules:
/// - a payment method must be selected;
/// - UPI and bank-transfer payments require a non-blank transaction id
///   (cash does not);
/// - the paid amount must be non-negative.
///
/// Paying more than the total due is deliberately *not* a finding:
/// overpayment is legitimate and is carried through the ledger by
/// [`settle_ledger`](crate::calculation::settle_ledger).
///
/// # Examples
///
/// ```
/// use wage_ledger_engine::calculation::{validate_payment_submission, PaymentSubmission, ValidationIssue};
/// use wage_ledger_engine::models::PaymentMethod;
/// use rust_decimal::Decimal;
///
/// let submission = PaymentSubmission {
///     method: Some(PaymentMethod::Upi),
///     transaction_id: None,
///     paid_amount: Decimal::from(500),
/// };
/// let outcome = validate_payment_submission(&submission);
/// assert_eq!(outcome.issues(), &[ValidationIssue::MissingTransactionId]);
/// ```
pub fn validate_payment_submission(submission: &PaymentSubmission) -> ValidationOutcome {
    let mut issues = Vec::new();

    match submission.method {
        None => issues.push(ValidationIssue::MissingPaymentMethod),
        Some(method) if method.requires_transaction_id() => {
            let blank = submission
                .transaction_id
                .as_deref()
                .map_or(true, |id| id.trim().is_empty());
            if blank {
                issues.push(ValidationIssue::MissingTransactionId);
            }
        }
        Some(_) => {}
    }

    if submission.paid_amount < Decimal::ZERO {
        issues.push(ValidationIssue::NegativePaidAmount);
    }

    ValidationOutcome { issues }
}
