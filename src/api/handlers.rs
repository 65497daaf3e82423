//! HTTP request handlers for the Wage Ledger Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_breakdown, compute_pending, settle_ledger, validate_payment_submission,
    PaymentSubmission,
};
use crate::models::LedgerBalance;

use super::request::{CalculationRequest, SettleRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, SettleResponse, ValidationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/settle", post(settle_handler))
        .route("/payment/validate", post(validate_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into a structured 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response400 {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
}

type Response400 = (
    StatusCode,
    [(header::HeaderName, &'static str); 1],
    Json<ApiError>,
);

/// Handler for the POST /calculate endpoint.
///
/// Computes the breakdown for the period, the pending figure for the
/// tentative paid amount, and a ledger settlement preview when the request
/// carries a carried-forward balance.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let breakdown = match compute_breakdown(&request.profile, &request.summary) {
        Ok(breakdown) => breakdown,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let paid_amount = request.paid_amount.unwrap_or(Decimal::ZERO);
    let pending = compute_pending(breakdown.total, paid_amount);

    let ledger_preview = match request.ledger {
        Some(ledger) => match settle_ledger(ledger, breakdown.total, paid_amount) {
            Ok(settled) => Some(settled),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    employee_id = %request.employee_id,
                    error = %err,
                    "Ledger preview failed"
                );
                let api_error: ApiErrorResponse = err.into();
                return api_error.into_response();
            }
        },
        None => None,
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        total = %breakdown.total,
        pending = %pending,
        "Calculation completed successfully"
    );

    let response = CalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee_id,
        period: request.period,
        lines: breakdown.active_lines().into_iter().copied().collect(),
        rounded_total: breakdown.rounded_total(state.settings().minor_unit_scale),
        total: breakdown.total,
        pending,
        ledger_preview,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for the POST /settle endpoint.
async fn settle_handler(
    payload: Result<Json<SettleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let balance = LedgerBalance::new(request.credit, request.debit);
    match settle_ledger(balance, request.total_due, request.paid_amount) {
        Ok(ledger) => {
            info!(
                correlation_id = %correlation_id,
                credit = %ledger.credit,
                debit = %ledger.debit,
                "Ledger settled"
            );
            let response = SettleResponse {
                ledger,
                pending: compute_pending(request.total_due, request.paid_amount),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Settlement failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the POST /payment/validate endpoint.
async fn validate_handler(
    payload: Result<Json<PaymentSubmission>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let submission = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let outcome = validate_payment_submission(&submission);
    if !outcome.is_valid() {
        info!(
            correlation_id = %correlation_id,
            issues = outcome.issues().len(),
            "Submission blocked by validation"
        );
    }
    let response = ValidationResponse {
        valid: outcome.is_valid(),
        issues: outcome.issues().iter().copied().map(Into::into).collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::json;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::default())
    }

    async fn post_json(router: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn valid_calculation_body() -> serde_json::Value {
        json!({
            "employee_id": "emp_001",
            "period": {"start_date": "2026-08-01", "end_date": "2026-08-31"},
            "profile": {
                "regular_wage": "100",
                "overtime_wage": "50",
                "overtime_type": "hourly"
            },
            "summary": {
                "regular_days": "20",
                "overtime_hours": "10"
            },
            "paid_amount": "2000"
        })
    }

    #[tokio::test]
    async fn test_calculate_returns_total_and_pending() {
        let (status, body) = post_json(create_test_router(), "/calculate", valid_calculation_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], "2500");
        assert_eq!(body["pending"], "500");
        assert_eq!(body["employee_id"], "emp_001");
        assert_eq!(body["lines"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_calculate_with_ledger_returns_preview() {
        let mut request = valid_calculation_body();
        request["paid_amount"] = json!("2700");
        request["ledger"] = json!({"credit": "0", "debit": "0"});

        let (status, body) = post_json(create_test_router(), "/calculate", request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ledger_preview"]["credit"], "200");
        assert_eq!(body["ledger_preview"]["debit"], "0");
    }

    #[tokio::test]
    async fn test_calculate_malformed_json_returns_400() {
        let router = create_test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_calculate_negative_quantity_returns_400() {
        let mut request = valid_calculation_body();
        request["summary"]["regular_days"] = json!("-1");

        let (status, body) = post_json(create_test_router(), "/calculate", request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "NEGATIVE_QUANTITY");
    }

    #[tokio::test]
    async fn test_settle_overpayment_grows_credit() {
        let request = json!({"total_due": "1000", "paid_amount": "1200"});

        let (status, body) = post_json(create_test_router(), "/settle", request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ledger"]["credit"], "200");
        assert_eq!(body["ledger"]["debit"], "0");
        assert_eq!(body["pending"], "0");
    }

    #[tokio::test]
    async fn test_validate_flags_missing_transaction_id() {
        let request = json!({"payment_type": "upi", "payed_amount": "500"});

        let (status, body) = post_json(create_test_router(), "/payment/validate", request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false);
        assert_eq!(body["issues"][0]["issue"], "missing_transaction_id");
    }
}
