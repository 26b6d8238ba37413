//! Vehicle DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::vehicle::Vehicle;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleResponse {
    pub plate_number: String,
    pub driver_name: String,
    pub phone_number: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(v: Vehicle) -> Self {
        Self {
            plate_number: v.plate_number,
            driver_name: v.driver_name,
            phone_number: v.phone_number,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterVehicleRequest {
    #[validate(length(min = 1, max = 20, message = "plate number is required"))]
    pub plate_number: String,
    #[validate(length(min = 1, max = 100, message = "driver name is required"))]
    pub driver_name: String,
    #[validate(length(min = 1, max = 20, message = "phone number is required"))]
    pub phone_number: String,
}

/// The plate itself is the identity key and cannot be changed.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100, message = "driver name is required"))]
    pub driver_name: String,
    #[validate(length(min = 1, max = 20, message = "phone number is required"))]
    pub phone_number: String,
}
