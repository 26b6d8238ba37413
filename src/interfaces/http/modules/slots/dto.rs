//! Slot DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::slot::ParkingSlot;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SlotResponse {
    pub slot_number: String,
    pub status: String,
}

impl From<ParkingSlot> for SlotResponse {
    fn from(s: ParkingSlot) -> Self {
        Self {
            slot_number: s.slot_number,
            status: s.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSlotRequest {
    #[validate(length(min = 1, max = 20, message = "slot number is required"))]
    pub slot_number: String,
    /// Available, Occupied or Maintenance. Defaults to Available.
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSlotStatusRequest {
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}
