//! Parking record domain entity and fare arithmetic

use chrono::{DateTime, Utc};

use crate::domain::slot::SlotStatus;

/// Flat fee per billed hour, in whole currency units
pub const RATE_PER_HOUR: i64 = 500;

/// One parking session for one vehicle in one slot
#[derive(Debug, Clone)]
pub struct ParkingRecord {
    /// Sequential record ID assigned by the store
    pub id: i32,
    /// Plate of the parked vehicle
    pub plate_number: String,
    /// Slot the vehicle occupies
    pub slot_number: String,
    /// Check-in timestamp
    pub entry_time: DateTime<Utc>,
    /// Check-out timestamp (None while the vehicle is parked)
    pub exit_time: Option<DateTime<Utc>>,
    /// Billable duration in minutes, populated at check-out
    pub duration_minutes: Option<i64>,
}

impl ParkingRecord {
    /// A record is active while it has no exit time.
    pub fn is_active(&self) -> bool {
        self.exit_time.is_none()
    }
}

/// Record enriched with vehicle and slot context for listings
#[derive(Debug, Clone)]
pub struct ParkingRecordDetails {
    pub record: ParkingRecord,
    pub driver_name: String,
    pub phone_number: String,
    pub slot_status: SlotStatus,
}

/// Fee breakdown for a parking interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareBreakdown {
    /// Elapsed time rounded up to whole minutes
    pub duration_minutes: i64,
    /// Duration rounded up to whole hours
    pub billed_hours: i64,
    /// `billed_hours` × [`RATE_PER_HOUR`]
    pub amount: i64,
}

impl FareBreakdown {
    /// Fare for the interval between entry and exit.
    ///
    /// Minutes are the millisecond interval rounded up; a negative interval
    /// clamps to zero. A zero interval bills 0/0/0 (documented boundary, not
    /// an error).
    pub fn for_interval(entry: DateTime<Utc>, exit: DateTime<Utc>) -> Self {
        let elapsed_ms = (exit - entry).num_milliseconds().max(0);
        Self::for_duration_minutes(ceil_div(elapsed_ms, 60_000))
    }

    /// Fare recomputed from an already-stored duration (bill generation).
    pub fn for_duration_minutes(duration_minutes: i64) -> Self {
        let duration_minutes = duration_minutes.max(0);
        let billed_hours = ceil_div(duration_minutes, 60);
        Self {
            duration_minutes,
            billed_hours,
            amount: billed_hours * RATE_PER_HOUR,
        }
    }
}

/// Ceiling division for non-negative numerators.
fn ceil_div(n: i64, d: i64) -> i64 {
    (n + d - 1) / d
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, h, m, s).unwrap()
    }

    fn sample_record() -> ParkingRecord {
        ParkingRecord {
            id: 1,
            plate_number: "AB123CD".into(),
            slot_number: "A1".into(),
            entry_time: ts(10, 0, 0),
            exit_time: None,
            duration_minutes: None,
        }
    }

    #[test]
    fn record_without_exit_is_active() {
        let rec = sample_record();
        assert!(rec.is_active());
    }

    #[test]
    fn record_with_exit_is_closed() {
        let mut rec = sample_record();
        rec.exit_time = Some(ts(11, 0, 0));
        rec.duration_minutes = Some(60);
        assert!(!rec.is_active());
    }

    #[test]
    fn one_minute_one_second_bills_one_hour() {
        // 61 s → 2 min → 1 h → 500
        let fare = FareBreakdown::for_interval(ts(10, 0, 0), ts(10, 1, 1));
        assert_eq!(fare.duration_minutes, 2);
        assert_eq!(fare.billed_hours, 1);
        assert_eq!(fare.amount, 500);
    }

    #[test]
    fn two_hours_bill_two_hours() {
        // 120 min → 2 h → 1000
        let fare = FareBreakdown::for_interval(ts(9, 0, 0), ts(11, 0, 0));
        assert_eq!(fare.duration_minutes, 120);
        assert_eq!(fare.billed_hours, 2);
        assert_eq!(fare.amount, 1000);
    }

    #[test]
    fn zero_interval_bills_zero() {
        // exit == entry is accepted, not corrected
        let fare = FareBreakdown::for_interval(ts(9, 0, 0), ts(9, 0, 0));
        assert_eq!(fare.duration_minutes, 0);
        assert_eq!(fare.billed_hours, 0);
        assert_eq!(fare.amount, 0);
    }

    #[test]
    fn negative_interval_clamps_to_zero() {
        let fare = FareBreakdown::for_interval(ts(11, 0, 0), ts(9, 0, 0));
        assert_eq!(fare.duration_minutes, 0);
        assert_eq!(fare.amount, 0);
    }

    #[test]
    fn exact_hour_bills_one_hour() {
        let fare = FareBreakdown::for_interval(ts(10, 0, 0), ts(11, 0, 0));
        assert_eq!(fare.duration_minutes, 60);
        assert_eq!(fare.billed_hours, 1);
        assert_eq!(fare.amount, 500);
    }

    #[test]
    fn one_second_over_the_hour_bills_two_hours() {
        // 3601 s → 61 min → 2 h → 1000
        let fare = FareBreakdown::for_interval(ts(9, 0, 0), ts(10, 0, 1));
        assert_eq!(fare.duration_minutes, 61);
        assert_eq!(fare.billed_hours, 2);
        assert_eq!(fare.amount, 1000);
    }

    #[test]
    fn sub_minute_stay_still_bills_one_hour() {
        // 30 s → 1 min → 1 h → 500
        let fare = FareBreakdown::for_interval(ts(10, 0, 0), ts(10, 0, 30));
        assert_eq!(fare.duration_minutes, 1);
        assert_eq!(fare.billed_hours, 1);
        assert_eq!(fare.amount, 500);
    }

    #[test]
    fn stored_duration_fifty_nine_minutes() {
        let fare = FareBreakdown::for_duration_minutes(59);
        assert_eq!(fare.billed_hours, 1);
        assert_eq!(fare.amount, 500);
    }

    #[test]
    fn stored_duration_sixty_one_minutes() {
        let fare = FareBreakdown::for_duration_minutes(61);
        assert_eq!(fare.billed_hours, 2);
        assert_eq!(fare.amount, 1000);
    }

    #[test]
    fn stored_duration_zero() {
        let fare = FareBreakdown::for_duration_minutes(0);
        assert_eq!(fare.billed_hours, 0);
        assert_eq!(fare.amount, 0);
    }

    #[test]
    fn stored_negative_duration_clamps() {
        let fare = FareBreakdown::for_duration_minutes(-5);
        assert_eq!(fare.duration_minutes, 0);
        assert_eq!(fare.amount, 0);
    }
}
