//! Domain models for the Wage Ledger Engine.

mod breakdown;
mod ledger;
mod payment;
mod wage_profile;
mod work_summary;

pub use breakdown::{PayCategory, PayLine, PaymentBreakdown};
pub use ledger::LedgerBalance;
pub use payment::{PaymentMethod, PaymentTransaction};
pub use wage_profile::{EmployeeWageProfile, OvertimeType};
pub use work_summary::WorkSummary;
