//! Request types for the Wage Ledger Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`,
//! `/settle`, and `/payment/validate` endpoints. The domain models carry
//! `serde` aliases for the reference backend's legacy field names
//! (`wage_hour`, `regular_day`, `payed_amount`, ...), so callers migrating
//! from that backend can post their existing payloads unchanged.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeWageProfile, LedgerBalance, WorkSummary};

/// Request body for the `/calculate` endpoint.
///
/// Contains everything needed to compute a period's breakdown, the pending
/// figure for an optional tentative paid amount, and a ledger preview when
/// a carried-forward balance is supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The evaluation period.
    pub period: PeriodRequest,
    /// The employee's wage configuration.
    pub profile: EmployeeWageProfile,
    /// The work performed in the period, with any operator overrides.
    pub summary: WorkSummary,
    /// Tentative amount paid; when absent, treated as zero.
    #[serde(default, alias = "payed_amount")]
    pub paid_amount: Option<Decimal>,
    /// Carried-forward ledger balance; when present, the response includes
    /// a settlement preview.
    #[serde(default)]
    pub ledger: Option<LedgerBalance>,
}

/// An evaluation period in a calculation request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

/// Request body for the `/settle` endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SettleRequest {
    /// Carried-forward credit (owed to the employee).
    #[serde(default)]
    pub credit: Decimal,
    /// Carried-forward debit (owed by the employee).
    #[serde(default)]
    pub debit: Decimal,
    /// The computed total due for the period.
    pub total_due: Decimal,
    /// The amount actually paid.
    #[serde(alias = "payed_amount")]
    pub paid_amount: Decimal,
}
