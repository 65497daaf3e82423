//! HTTP API for the Wage Ledger Engine.
//!
//! A thin `axum` adapter exposing the pure calculation core to the
//! consuming UI: breakdown calculation with ledger preview, standalone
//! ledger settlement, and payment-submission validation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, PeriodRequest, SettleRequest};
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, SettleResponse, ValidationIssueBody,
    ValidationResponse,
};
pub use state::{AppState, EngineSettings};
