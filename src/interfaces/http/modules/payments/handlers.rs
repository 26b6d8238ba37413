//! Payment REST API handlers: the payment log, revenue reports and bills

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;

use super::dto::{
    BillResponse, DailyReportResponse, PaymentCreatedResponse, PaymentResponse,
    RecordPaymentRequest,
};
use crate::application::BillingService;
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::shared::errors::DomainError;

/// Billing state
#[derive(Clone)]
pub struct BillingAppState {
    pub service: Arc<BillingService>,
}

// ── Query params ───────────────────────────────────────────────

/// Date filter for the revenue report.
#[derive(Debug, serde::Deserialize)]
pub struct DailyReportParams {
    /// Calendar date, YYYY-MM-DD. Omit for the all-time report.
    pub date: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/payments",
    tag = "Payments",
    security(("bearer_auth" = [])),
    request_body = RecordPaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = ApiResponse<PaymentCreatedResponse>),
        (status = 500, description = "Unknown record id rejected by the store")
    )
)]
pub async fn record_payment(
    State(state): State<BillingAppState>,
    ValidatedJson(req): ValidatedJson<RecordPaymentRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<PaymentCreatedResponse>>),
    (StatusCode, Json<ApiResponse<()>>),
> {
    match state
        .service
        .record_payment(req.record_id, req.amount_paid, req.payment_time)
        .await
    {
        Ok(payment_id) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(PaymentCreatedResponse { payment_id })),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/payments",
    tag = "Payments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All payments, newest first", body = ApiResponse<Vec<PaymentResponse>>)
    )
)]
pub async fn list_payments(
    State(state): State<BillingAppState>,
) -> Result<Json<ApiResponse<Vec<PaymentResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.list_payments().await {
        Ok(payments) => {
            let responses: Vec<PaymentResponse> = payments.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/payments/daily-report",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(
        ("date" = Option<String>, Query, description = "Calendar date YYYY-MM-DD; omit for all time")
    ),
    responses(
        (status = 200, description = "Payment count and revenue sum", body = ApiResponse<DailyReportResponse>),
        (status = 400, description = "Malformed date")
    )
)]
pub async fn daily_report(
    State(state): State<BillingAppState>,
    Query(params): Query<DailyReportParams>,
) -> Result<Json<ApiResponse<DailyReportResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let date = match params.date.as_deref() {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            error_response(DomainError::Validation(format!(
                "Invalid date '{}', expected YYYY-MM-DD",
                raw
            )))
        })?),
        None => None,
    };

    match state.service.daily_report(date).await {
        Ok(report) => Ok(Json(ApiResponse::success(report.into()))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/payments/bill/{record_id}",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("record_id" = i32, Path, description = "Parking record ID")),
    responses(
        (status = 200, description = "Bill with stored or computed amount", body = ApiResponse<BillResponse>),
        (status = 404, description = "Record not found")
    )
)]
pub async fn generate_bill(
    State(state): State<BillingAppState>,
    Path(record_id): Path<i32>,
) -> Result<Json<ApiResponse<BillResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.generate_bill(record_id).await {
        Ok(bill) => Ok(Json(ApiResponse::success(bill.into()))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/payments/{id}",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment details", body = ApiResponse<PaymentResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_payment(
    State(state): State<BillingAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<PaymentResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.get_payment(id).await {
        Ok(Some(payment)) => Ok(Json(ApiResponse::success(payment.into()))),
        Ok(None) => Err(error_response(DomainError::not_found(
            "Payment",
            "id",
            id.to_string(),
        ))),
        Err(e) => Err(error_response(e)),
    }
}
