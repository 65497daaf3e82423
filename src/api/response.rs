//! Response types for the Wage Ledger Engine API.
//!
//! This module defines the success payloads plus the error response
//! structures and error mapping for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::ValidationIssue;
use crate::error::EngineError;
use crate::models::{LedgerBalance, PayLine};

use super::request::PeriodRequest;

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique id of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The evaluation period.
    pub period: PeriodRequest,
    /// The active pay lines (non-zero quantities only).
    pub lines: Vec<PayLine>,
    /// The exact computed total.
    pub total: Decimal,
    /// The total rounded to the currency minor unit.
    pub rounded_total: Decimal,
    /// Shortfall between the total and the tentative paid amount.
    pub pending: Decimal,
    /// Settlement preview, present when the request carried a ledger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_preview: Option<LedgerBalance>,
}

/// Response body for the `/settle` endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SettleResponse {
    /// The settled balance.
    pub ledger: LedgerBalance,
    /// The non-negative pending figure for the period.
    pub pending: Decimal,
}

/// Response body for the `/payment/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// True when the submission may proceed.
    pub valid: bool,
    /// The findings blocking submission, if any.
    pub issues: Vec<ValidationIssueBody>,
}

/// A validation finding with its display message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssueBody {
    /// The finding code.
    pub issue: ValidationIssue,
    /// Human-readable message naming the failing field.
    pub message: String,
}

impl From<ValidationIssue> for ValidationIssueBody {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            message: issue.message().to_string(),
            issue,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::NegativeQuantity { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NEGATIVE_QUANTITY",
                    format!("Negative quantity in field '{}'", field),
                    format!("Work-summary quantities must be non-negative, got {}", value),
                ),
            },
            EngineError::NegativeRate { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NEGATIVE_RATE",
                    format!("Negative rate in field '{}'", field),
                    format!("Wage rates must be non-negative, got {}", value),
                ),
            },
            EngineError::NegativeAmount { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NEGATIVE_AMOUNT",
                    format!("Negative amount in field '{}'", field),
                    format!("Monetary amounts must be non-negative, got {}", value),
                ),
            },
            EngineError::NegativeBalance { side, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NEGATIVE_BALANCE",
                    format!("Negative ledger {} balance", side),
                    format!("Ledger balances must be non-negative, got {}", value),
                ),
            },
            EngineError::InvalidTransition { action, state } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new(
                    "INVALID_TRANSITION",
                    format!("Cannot {} while {}", action, state),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_negative_rate_maps_to_bad_request() {
        let engine_error = EngineError::NegativeRate {
            field: "regular_wage".to_string(),
            value: Decimal::from(-1),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "NEGATIVE_RATE");
    }

    #[test]
    fn test_negative_amount_maps_to_bad_request() {
        let engine_error = EngineError::NegativeAmount {
            field: "total_due".to_string(),
            value: Decimal::from(-500),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "NEGATIVE_AMOUNT");
    }

    #[test]
    fn test_invalid_transition_maps_to_conflict() {
        let engine_error = EngineError::InvalidTransition {
            action: "submit".to_string(),
            state: "draft".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "INVALID_TRANSITION");
    }

    #[test]
    fn test_validation_issue_body_carries_message() {
        let body: ValidationIssueBody = ValidationIssue::MissingTransactionId.into();
        assert!(body.message.contains("transaction ID"));
    }
}
