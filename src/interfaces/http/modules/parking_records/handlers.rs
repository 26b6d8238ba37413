//! Parking record REST API handlers: check-in, check-out and the ledger views

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CheckInRequest, CheckInResponse, CheckOutRequest, CheckOutResponse, RecordResponse,
};
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::slots::ParkingAppState;
use crate::shared::errors::DomainError;

#[utoipa::path(
    post,
    path = "/api/v1/parking-records/entry",
    tag = "Parking Records",
    security(("bearer_auth" = [])),
    request_body = CheckInRequest,
    responses(
        (status = 201, description = "Vehicle checked in", body = ApiResponse<CheckInResponse>),
        (status = 400, description = "Slot is not available"),
        (status = 404, description = "Slot not found")
    )
)]
pub async fn check_in(
    State(state): State<ParkingAppState>,
    ValidatedJson(req): ValidatedJson<CheckInRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CheckInResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    match state
        .service
        .check_in(&req.plate_number, &req.slot_number, req.entry_time)
        .await
    {
        Ok(record_id) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(CheckInResponse { record_id })),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/parking-records/exit/{id}",
    tag = "Parking Records",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Record ID")),
    request_body = CheckOutRequest,
    responses(
        (status = 200, description = "Vehicle checked out with the computed fee", body = ApiResponse<CheckOutResponse>),
        (status = 404, description = "Record not found")
    )
)]
pub async fn check_out(
    State(state): State<ParkingAppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CheckOutRequest>,
) -> Result<Json<ApiResponse<CheckOutResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.check_out(id, req.exit_time).await {
        Ok(fare) => Ok(Json(ApiResponse::success(fare.into()))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/parking-records",
    tag = "Parking Records",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All records, newest first", body = ApiResponse<Vec<RecordResponse>>)
    )
)]
pub async fn list_records(
    State(state): State<ParkingAppState>,
) -> Result<Json<ApiResponse<Vec<RecordResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.list_records().await {
        Ok(records) => {
            let responses: Vec<RecordResponse> = records.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/parking-records/active",
    tag = "Parking Records",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Records of currently parked vehicles", body = ApiResponse<Vec<RecordResponse>>)
    )
)]
pub async fn list_active_records(
    State(state): State<ParkingAppState>,
) -> Result<Json<ApiResponse<Vec<RecordResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.list_active_records().await {
        Ok(records) => {
            let responses: Vec<RecordResponse> = records.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/parking-records/{id}",
    tag = "Parking Records",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Record ID")),
    responses(
        (status = 200, description = "Record details", body = ApiResponse<RecordResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_record(
    State(state): State<ParkingAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RecordResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.get_record(id).await {
        Ok(Some(record)) => Ok(Json(ApiResponse::success(record.into()))),
        Ok(None) => Err(error_response(DomainError::not_found(
            "Parking record",
            "id",
            id.to_string(),
        ))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/parking-records/{id}",
    tag = "Parking Records",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Record ID")),
    responses(
        (status = 200, description = "Record deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_record(
    State(state): State<ParkingAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.delete_record(id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(e) => Err(error_response(e)),
    }
}
