//! Error types for the Wage Ledger Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during wage computation and the
//! payment workflow. Validation findings on a payment submission are *not*
//! errors: they are returned as a structured
//! [`ValidationOutcome`](crate::calculation::ValidationOutcome) so the
//! operator can be shown every failing field at once.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Wage Ledger Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use wage_ledger_engine::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let error = EngineError::NegativeQuantity {
///     field: "regular_days".to_string(),
///     value: Decimal::from(-2),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Negative quantity in field 'regular_days': -2"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A work-summary quantity was negative.
    #[error("Negative quantity in field '{field}': {value}")]
    NegativeQuantity {
        /// The work-summary field that was negative.
        field: String,
        /// The offending value.
        value: Decimal,
    },

    /// A wage rate was negative, either on the profile or as a per-period
    /// override.
    #[error("Negative rate in field '{field}': {value}")]
    NegativeRate {
        /// The profile or override field that was negative.
        field: String,
        /// The offending value.
        value: Decimal,
    },

    /// A monetary amount that must be non-negative was negative.
    #[error("Negative amount in field '{field}': {value}")]
    NegativeAmount {
        /// The amount field that was negative.
        field: String,
        /// The offending value.
        value: Decimal,
    },

    /// A ledger balance field was negative on entry.
    #[error("Negative ledger {side} balance: {value}")]
    NegativeBalance {
        /// Which side of the ledger was negative ("credit" or "debit").
        side: String,
        /// The offending value.
        value: Decimal,
    },

    /// A payment workflow transition was attempted from the wrong state.
    #[error("Invalid workflow transition: cannot {action} while {state}")]
    InvalidTransition {
        /// The attempted action (e.g., "submit").
        action: String,
        /// The state the workflow was in.
        state: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
