//! Wage Ledger Engine for workforce payroll settlement.
//!
//! This crate computes itemized wage breakdowns from per-period work
//! summaries, settles over/under payments against a per-employee
//! credit/debit ledger, and validates payment submissions before they are
//! handed to an external backend.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod workflow;
