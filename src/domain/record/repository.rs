//! Parking record repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{FareBreakdown, ParkingRecordDetails};
use crate::domain::DomainResult;

#[async_trait]
pub trait ParkingRecordRepository: Send + Sync {
    /// Check a vehicle into a slot: verify the slot exists and is Available,
    /// insert the record, and flip the slot to Occupied, all in one storage
    /// transaction. Returns the new record id.
    ///
    /// Fails with `NotFound` (slot absent) or `InvalidState` (slot not
    /// Available); either failure leaves no record behind.
    async fn check_in(
        &self,
        plate_number: &str,
        slot_number: &str,
        entry_time: DateTime<Utc>,
    ) -> DomainResult<i32>;

    /// Close a record: store exit time and duration and flip the referenced
    /// slot back to Available, all in one storage transaction. Returns the
    /// computed fare. Closing an already-closed record recomputes and
    /// overwrites exit/duration.
    ///
    /// Fails with `NotFound` if the record does not exist; no mutation then.
    async fn check_out(
        &self,
        record_id: i32,
        exit_time: DateTime<Utc>,
    ) -> DomainResult<FareBreakdown>;

    /// All records with driver/slot context, entry time descending.
    async fn find_all_detailed(&self) -> DomainResult<Vec<ParkingRecordDetails>>;
    /// Open records (no exit time) with driver/slot context, entry time descending.
    async fn find_active_detailed(&self) -> DomainResult<Vec<ParkingRecordDetails>>;
    async fn find_detailed_by_id(&self, id: i32) -> DomainResult<Option<ParkingRecordDetails>>;
    /// Fails with `NotFound` if the record does not exist. Slot status is
    /// deliberately left untouched.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
