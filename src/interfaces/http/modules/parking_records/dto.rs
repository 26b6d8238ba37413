//! Parking record DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::record::{FareBreakdown, ParkingRecordDetails};

/// Record enriched with driver and slot context
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecordResponse {
    pub id: i32,
    pub plate_number: String,
    pub slot_number: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
    pub driver_name: String,
    pub phone_number: String,
    pub slot_status: String,
}

impl From<ParkingRecordDetails> for RecordResponse {
    fn from(d: ParkingRecordDetails) -> Self {
        Self {
            id: d.record.id,
            plate_number: d.record.plate_number,
            slot_number: d.record.slot_number,
            entry_time: d.record.entry_time,
            exit_time: d.record.exit_time,
            duration_minutes: d.record.duration_minutes,
            driver_name: d.driver_name,
            phone_number: d.phone_number,
            slot_status: d.slot_status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckInRequest {
    #[validate(length(min = 1, max = 20, message = "plate number is required"))]
    pub plate_number: String,
    #[validate(length(min = 1, max = 20, message = "slot number is required"))]
    pub slot_number: String,
    /// Entry timestamp, ISO-8601
    pub entry_time: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckInResponse {
    pub record_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckOutRequest {
    /// Exit timestamp, ISO-8601
    pub exit_time: DateTime<Utc>,
}

/// Fee computed at check-out
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckOutResponse {
    pub duration_minutes: i64,
    pub billed_hours: i64,
    pub amount: i64,
}

impl From<FareBreakdown> for CheckOutResponse {
    fn from(f: FareBreakdown) -> Self {
        Self {
            duration_minutes: f.duration_minutes,
            billed_hours: f.billed_hours,
            amount: f.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::ParkingRecord;
    use crate::domain::slot::SlotStatus;
    use chrono::TimeZone;

    #[test]
    fn record_response_flattens_details() {
        let entry = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let details = ParkingRecordDetails {
            record: ParkingRecord {
                id: 7,
                plate_number: "AB123CD".into(),
                slot_number: "A1".into(),
                entry_time: entry,
                exit_time: None,
                duration_minutes: None,
            },
            driver_name: "Karim Ahmed".into(),
            phone_number: "01711111111".into(),
            slot_status: SlotStatus::Occupied,
        };

        let resp = RecordResponse::from(details);
        assert_eq!(resp.id, 7);
        assert_eq!(resp.driver_name, "Karim Ahmed");
        assert_eq!(resp.slot_status, "Occupied");
        assert!(resp.exit_time.is_none());
    }

    #[test]
    fn checkout_response_carries_fare_fields() {
        let fare = FareBreakdown {
            duration_minutes: 61,
            billed_hours: 2,
            amount: 1000,
        };
        let resp = CheckOutResponse::from(fare);
        assert_eq!(resp.duration_minutes, 61);
        assert_eq!(resp.billed_hours, 2);
        assert_eq!(resp.amount, 1000);
    }
}
