//! Calculation logic for the Wage Ledger Engine.
//!
//! This module contains the pure computation functions: the itemized wage
//! breakdown, the pending-payment figure, the credit/debit ledger
//! settlement, payment-submission validation, presentation rounding, and
//! the geofence tolerance conversion helper.

mod breakdown;
mod ledger;
mod pending;
mod rounding;
mod tolerance;
mod validation;

pub use breakdown::compute_breakdown;
pub use ledger::settle_ledger;
pub use pending::compute_pending;
pub use rounding::{DEFAULT_MINOR_UNIT_SCALE, round_to_minor_unit};
pub use tolerance::{format_tolerance, parse_tolerance_meters};
pub use validation::{PaymentSubmission, ValidationIssue, ValidationOutcome, validate_payment_submission};
