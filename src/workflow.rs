//! Per-period payment workflow.
//!
//! A payment for one employee and one evaluation period moves through
//! `Draft → Calculated → Reviewed → Submitted`. The workflow owns no I/O:
//! [`PaymentWorkflow::submit`] hands a [`PaymentTransaction`] to the caller
//! while the workflow stays `Reviewed`, so a failed external submission can
//! be retried from the same reviewed workflow. The caller acknowledges a
//! successful hand-off with [`PaymentWorkflow::confirm_submitted`], which
//! reaches the terminal `Submitted` state.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::{
    compute_breakdown, validate_payment_submission, PaymentSubmission, ValidationOutcome,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    EmployeeWageProfile, PaymentBreakdown, PaymentMethod, PaymentTransaction, WorkSummary,
};

/// The state of a payment workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// No work summary has been computed yet.
    Draft,
    /// A breakdown has been computed; a ledger preview is available.
    Calculated,
    /// The operator's submission passed validation.
    Reviewed,
    /// The external backend has accepted the payment transaction.
    Submitted,
}

impl WorkflowState {
    fn name(&self) -> &'static str {
        match self {
            WorkflowState::Draft => "draft",
            WorkflowState::Calculated => "calculated",
            WorkflowState::Reviewed => "reviewed",
            WorkflowState::Submitted => "submitted",
        }
    }
}

/// The result of reviewing an operator submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewResult {
    /// The submission passed validation; the workflow is now `Reviewed`.
    Accepted,
    /// The submission failed validation; the workflow stays `Calculated`
    /// and the findings are returned for display.
    Rejected(ValidationOutcome),
}

/// A submission that passed validation, with the method made mandatory.
#[derive(Debug, Clone)]
struct ReviewedSubmission {
    method: PaymentMethod,
    transaction_id: Option<String>,
    paid_amount: Decimal,
}

/// A payment workflow for one employee and one evaluation period.
#[derive(Debug, Clone)]
pub struct PaymentWorkflow {
    employee_id: String,
    period_start: NaiveDate,
    period_end: NaiveDate,
    state: WorkflowState,
    breakdown: Option<PaymentBreakdown>,
    reviewed: Option<ReviewedSubmission>,
}

impl PaymentWorkflow {
    /// Starts a draft workflow for the given employee and period.
    pub fn new(employee_id: impl Into<String>, period_start: NaiveDate, period_end: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            period_start,
            period_end,
            state: WorkflowState::Draft,
            breakdown: None,
            reviewed: None,
        }
    }

    /// The current workflow state.
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// The computed breakdown, once the workflow has been calculated.
    pub fn breakdown(&self) -> Option<&PaymentBreakdown> {
        self.breakdown.as_ref()
    }

    /// Computes the breakdown, moving `Draft → Calculated`.
    ///
    /// Recalculating from `Calculated` is allowed: the operator may adjust
    /// overrides and recompute before reviewing.
    pub fn calculate(
        &mut self,
        profile: &EmployeeWageProfile,
        summary: &WorkSummary,
    ) -> EngineResult<&PaymentBreakdown> {
        match self.state {
            WorkflowState::Draft | WorkflowState::Calculated => {}
            state => {
                return Err(EngineError::InvalidTransition {
                    action: "calculate".to_string(),
                    state: state.name().to_string(),
                });
            }
        }

        let breakdown = compute_breakdown(profile, summary)?;
        self.reviewed = None;
        self.state = WorkflowState::Calculated;
        Ok(self.breakdown.insert(breakdown))
    }

    /// Reviews an operator submission, moving `Calculated → Reviewed` when
    /// validation passes. A failing validation keeps the workflow in
    /// `Calculated` and reports the findings.
    pub fn review(&mut self, submission: PaymentSubmission) -> EngineResult<ReviewResult> {
        if self.state != WorkflowState::Calculated {
            return Err(EngineError::InvalidTransition {
                action: "review".to_string(),
                state: self.state.name().to_string(),
            });
        }

        let outcome = validate_payment_submission(&submission);
        let Some(method) = submission.method else {
            return Ok(ReviewResult::Rejected(outcome));
        };
        if !outcome.is_valid() {
            return Ok(ReviewResult::Rejected(outcome));
        }

        self.reviewed = Some(ReviewedSubmission {
            method,
            transaction_id: submission.transaction_id,
            paid_amount: submission.paid_amount,
        });
        self.state = WorkflowState::Reviewed;
        Ok(ReviewResult::Accepted)
    }

    /// Emits the payment transaction for the external backend.
    ///
    /// The workflow stays `Reviewed`: the engine performs no I/O, so it
    /// cannot know whether the external hand-off succeeded. A failed
    /// external submission leaves the caller free to call `submit` again
    /// and retry with the same transaction; once the backend accepts it,
    /// [`PaymentWorkflow::confirm_submitted`] closes the workflow.
    pub fn submit(&self) -> EngineResult<PaymentTransaction> {
        // Both are present exactly when the state is Reviewed.
        let (breakdown, reviewed) = match (self.state, &self.breakdown, &self.reviewed) {
            (WorkflowState::Reviewed, Some(breakdown), Some(reviewed)) => (breakdown, reviewed),
            (state, ..) => {
                return Err(EngineError::InvalidTransition {
                    action: "submit".to_string(),
                    state: state.name().to_string(),
                });
            }
        };

        Ok(PaymentTransaction {
            employee_id: self.employee_id.clone(),
            period_start: self.period_start,
            period_end: self.period_end,
            paid_amount: reviewed.paid_amount.max(Decimal::ZERO),
            computed_salary_amount: breakdown.total,
            payment_method: reviewed.method,
            transaction_id: reviewed.transaction_id.clone(),
        })
    }

    /// Acknowledges that the external backend accepted the transaction,
    /// moving `Reviewed → Submitted`. `Submitted` is terminal.
    pub fn confirm_submitted(&mut self) -> EngineResult<()> {
        if self.state != WorkflowState::Reviewed {
            return Err(EngineError::InvalidTransition {
                action: "confirm_submitted".to_string(),
                state: self.state.name().to_string(),
            });
        }
        self.state = WorkflowState::Submitted;
        Ok(())
    }
}
