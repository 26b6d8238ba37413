//! Parking operations service: slots, vehicles, and the occupancy ledger
//!
//! All slot/vehicle/record business logic lives here.
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::record::{FareBreakdown, ParkingRecordDetails};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::slot::{ParkingSlot, SlotStatus};
use crate::domain::vehicle::Vehicle;
use crate::domain::DomainResult;

/// Orchestrates slot allocation, vehicle registration and the
/// check-in/check-out lifecycle.
pub struct ParkingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ParkingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Slots ───────────────────────────────────────────────────

    pub async fn create_slot(&self, slot: ParkingSlot) -> DomainResult<ParkingSlot> {
        let created = self.repos.slots().create(slot).await?;
        info!(slot_number = %created.slot_number, "Slot created");
        Ok(created)
    }

    pub async fn list_slots(&self) -> DomainResult<Vec<ParkingSlot>> {
        self.repos.slots().find_all().await
    }

    pub async fn list_available_slots(&self) -> DomainResult<Vec<ParkingSlot>> {
        self.repos.slots().find_available().await
    }

    pub async fn get_slot(&self, slot_number: &str) -> DomainResult<Option<ParkingSlot>> {
        self.repos.slots().find_by_number(slot_number).await
    }

    pub async fn set_slot_status(
        &self,
        slot_number: &str,
        status: SlotStatus,
    ) -> DomainResult<ParkingSlot> {
        let updated = self.repos.slots().update_status(slot_number, status).await?;
        info!(slot_number, status = status.as_str(), "Slot status updated");
        Ok(updated)
    }

    pub async fn delete_slot(&self, slot_number: &str) -> DomainResult<()> {
        self.repos.slots().delete(slot_number).await?;
        info!(slot_number, "Slot deleted");
        Ok(())
    }

    // ── Vehicles ────────────────────────────────────────────────

    pub async fn register_vehicle(&self, vehicle: Vehicle) -> DomainResult<Vehicle> {
        let created = self.repos.vehicles().create(vehicle).await?;
        info!(plate_number = %created.plate_number, "Vehicle registered");
        Ok(created)
    }

    pub async fn list_vehicles(&self) -> DomainResult<Vec<Vehicle>> {
        self.repos.vehicles().find_all().await
    }

    pub async fn get_vehicle(&self, plate_number: &str) -> DomainResult<Option<Vehicle>> {
        self.repos.vehicles().find_by_plate(plate_number).await
    }

    pub async fn update_vehicle(&self, vehicle: Vehicle) -> DomainResult<Vehicle> {
        let updated = self.repos.vehicles().update(vehicle).await?;
        info!(plate_number = %updated.plate_number, "Vehicle updated");
        Ok(updated)
    }

    pub async fn delete_vehicle(&self, plate_number: &str) -> DomainResult<()> {
        self.repos.vehicles().delete(plate_number).await?;
        info!(plate_number, "Vehicle deleted");
        Ok(())
    }

    // ── Occupancy ledger ────────────────────────────────────────

    /// Check a vehicle into a slot. Fails when the slot is absent or not
    /// Available; on success the slot is flipped to Occupied atomically with
    /// the record insert.
    pub async fn check_in(
        &self,
        plate_number: &str,
        slot_number: &str,
        entry_time: DateTime<Utc>,
    ) -> DomainResult<i32> {
        let record_id = self
            .repos
            .records()
            .check_in(plate_number, slot_number, entry_time)
            .await?;
        info!(record_id, plate_number, slot_number, "Vehicle checked in");
        Ok(record_id)
    }

    /// Close a parking record, compute the fee and free the slot.
    pub async fn check_out(
        &self,
        record_id: i32,
        exit_time: DateTime<Utc>,
    ) -> DomainResult<FareBreakdown> {
        let fare = self.repos.records().check_out(record_id, exit_time).await?;
        info!(
            record_id,
            duration_minutes = fare.duration_minutes,
            billed_hours = fare.billed_hours,
            amount = fare.amount,
            "Vehicle checked out"
        );
        Ok(fare)
    }

    pub async fn list_records(&self) -> DomainResult<Vec<ParkingRecordDetails>> {
        self.repos.records().find_all_detailed().await
    }

    pub async fn list_active_records(&self) -> DomainResult<Vec<ParkingRecordDetails>> {
        self.repos.records().find_active_detailed().await
    }

    pub async fn get_record(&self, record_id: i32) -> DomainResult<Option<ParkingRecordDetails>> {
        self.repos.records().find_detailed_by_id(record_id).await
    }

    /// Remove a record from the ledger. Slot status is left as it stands,
    /// even when the record was still open.
    pub async fn delete_record(&self, record_id: i32) -> DomainResult<()> {
        self.repos.records().delete(record_id).await?;
        info!(record_id, "Record deleted");
        Ok(())
    }
}
