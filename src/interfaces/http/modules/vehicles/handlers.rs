//! Vehicle REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{RegisterVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::domain::vehicle::Vehicle;
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::slots::ParkingAppState;
use crate::shared::errors::DomainError;

#[utoipa::path(
    post,
    path = "/api/v1/vehicles",
    tag = "Vehicles",
    security(("bearer_auth" = [])),
    request_body = RegisterVehicleRequest,
    responses(
        (status = 201, description = "Vehicle registered", body = ApiResponse<VehicleResponse>),
        (status = 400, description = "Duplicate plate number")
    )
)]
pub async fn register_vehicle(
    State(state): State<ParkingAppState>,
    ValidatedJson(req): ValidatedJson<RegisterVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let vehicle = Vehicle::new(req.plate_number, req.driver_name, req.phone_number);

    match state.service.register_vehicle(vehicle).await {
        Ok(created) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(created.into())),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles",
    tag = "Vehicles",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All registered vehicles", body = ApiResponse<Vec<VehicleResponse>>)
    )
)]
pub async fn list_vehicles(
    State(state): State<ParkingAppState>,
) -> Result<Json<ApiResponse<Vec<VehicleResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.list_vehicles().await {
        Ok(vehicles) => {
            let responses: Vec<VehicleResponse> = vehicles.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{plate_number}",
    tag = "Vehicles",
    security(("bearer_auth" = [])),
    params(("plate_number" = String, Path, description = "Plate number")),
    responses(
        (status = 200, description = "Vehicle details", body = ApiResponse<VehicleResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_vehicle(
    State(state): State<ParkingAppState>,
    Path(plate_number): Path<String>,
) -> Result<Json<ApiResponse<VehicleResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.get_vehicle(&plate_number).await {
        Ok(Some(vehicle)) => Ok(Json(ApiResponse::success(vehicle.into()))),
        Ok(None) => Err(error_response(DomainError::not_found(
            "Vehicle",
            "plate_number",
            plate_number,
        ))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/vehicles/{plate_number}",
    tag = "Vehicles",
    security(("bearer_auth" = [])),
    params(("plate_number" = String, Path, description = "Plate number")),
    request_body = UpdateVehicleRequest,
    responses(
        (status = 200, description = "Vehicle updated", body = ApiResponse<VehicleResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_vehicle(
    State(state): State<ParkingAppState>,
    Path(plate_number): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let vehicle = Vehicle::new(plate_number, req.driver_name, req.phone_number);

    match state.service.update_vehicle(vehicle).await {
        Ok(updated) => Ok(Json(ApiResponse::success(updated.into()))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/vehicles/{plate_number}",
    tag = "Vehicles",
    security(("bearer_auth" = [])),
    params(("plate_number" = String, Path, description = "Plate number")),
    responses(
        (status = 200, description = "Vehicle deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_vehicle(
    State(state): State<ParkingAppState>,
    Path(plate_number): Path<String>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.delete_vehicle(&plate_number).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(e) => Err(error_response(e)),
    }
}
