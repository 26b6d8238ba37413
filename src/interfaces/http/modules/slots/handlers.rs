//! Slot REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateSlotRequest, SlotResponse, UpdateSlotStatusRequest};
use crate::application::ParkingService;
use crate::domain::slot::{ParkingSlot, SlotStatus};
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::shared::errors::DomainError;

/// State shared by the slot, vehicle and parking-record handlers
#[derive(Clone)]
pub struct ParkingAppState {
    pub service: Arc<ParkingService>,
}

fn parse_status(s: &str) -> Result<SlotStatus, DomainError> {
    SlotStatus::from_str(s)
        .ok_or_else(|| DomainError::Validation(format!("Invalid slot status: {}", s)))
}

#[utoipa::path(
    post,
    path = "/api/v1/slots",
    tag = "Slots",
    security(("bearer_auth" = [])),
    request_body = CreateSlotRequest,
    responses(
        (status = 201, description = "Slot created", body = ApiResponse<SlotResponse>),
        (status = 400, description = "Duplicate slot number or invalid status")
    )
)]
pub async fn create_slot(
    State(state): State<ParkingAppState>,
    ValidatedJson(req): ValidatedJson<CreateSlotRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SlotResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    let status = match req.status.as_deref() {
        Some(s) => parse_status(s).map_err(error_response)?,
        None => SlotStatus::Available,
    };

    match state
        .service
        .create_slot(ParkingSlot::new(req.slot_number, status))
        .await
    {
        Ok(slot) => Ok((StatusCode::CREATED, Json(ApiResponse::success(slot.into())))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/slots",
    tag = "Slots",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All slots", body = ApiResponse<Vec<SlotResponse>>)
    )
)]
pub async fn list_slots(
    State(state): State<ParkingAppState>,
) -> Result<Json<ApiResponse<Vec<SlotResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.list_slots().await {
        Ok(slots) => {
            let responses: Vec<SlotResponse> = slots.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/slots/available",
    tag = "Slots",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Slots free for check-in", body = ApiResponse<Vec<SlotResponse>>)
    )
)]
pub async fn list_available_slots(
    State(state): State<ParkingAppState>,
) -> Result<Json<ApiResponse<Vec<SlotResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.list_available_slots().await {
        Ok(slots) => {
            let responses: Vec<SlotResponse> = slots.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/slots/{slot_number}",
    tag = "Slots",
    security(("bearer_auth" = [])),
    params(("slot_number" = String, Path, description = "Slot number")),
    responses(
        (status = 200, description = "Slot details", body = ApiResponse<SlotResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_slot(
    State(state): State<ParkingAppState>,
    Path(slot_number): Path<String>,
) -> Result<Json<ApiResponse<SlotResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.get_slot(&slot_number).await {
        Ok(Some(slot)) => Ok(Json(ApiResponse::success(slot.into()))),
        Ok(None) => Err(error_response(DomainError::not_found(
            "Slot",
            "slot_number",
            slot_number,
        ))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/slots/{slot_number}",
    tag = "Slots",
    security(("bearer_auth" = [])),
    params(("slot_number" = String, Path, description = "Slot number")),
    request_body = UpdateSlotStatusRequest,
    responses(
        (status = 200, description = "Slot updated", body = ApiResponse<SlotResponse>),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_slot_status(
    State(state): State<ParkingAppState>,
    Path(slot_number): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateSlotStatusRequest>,
) -> Result<Json<ApiResponse<SlotResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let status = parse_status(&req.status).map_err(error_response)?;

    match state.service.set_slot_status(&slot_number, status).await {
        Ok(slot) => Ok(Json(ApiResponse::success(slot.into()))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/slots/{slot_number}",
    tag = "Slots",
    security(("bearer_auth" = [])),
    params(("slot_number" = String, Path, description = "Slot number")),
    responses(
        (status = 200, description = "Slot deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_slot(
    State(state): State<ParkingAppState>,
    Path(slot_number): Path<String>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.delete_slot(&slot_number).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(e) => Err(error_response(e)),
    }
}
