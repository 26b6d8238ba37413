//! Slot repository interface

use async_trait::async_trait;

use super::model::{ParkingSlot, SlotStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Fails with `Conflict` if the slot number is already taken.
    async fn create(&self, slot: ParkingSlot) -> DomainResult<ParkingSlot>;
    /// All slots ordered by slot number.
    async fn find_all(&self) -> DomainResult<Vec<ParkingSlot>>;
    /// Slots currently in `Available` status, ordered by slot number.
    async fn find_available(&self) -> DomainResult<Vec<ParkingSlot>>;
    async fn find_by_number(&self, slot_number: &str) -> DomainResult<Option<ParkingSlot>>;
    /// Fails with `NotFound` if the slot does not exist.
    async fn update_status(
        &self,
        slot_number: &str,
        status: SlotStatus,
    ) -> DomainResult<ParkingSlot>;
    /// Fails with `NotFound` if the slot does not exist. Dependent occupancy
    /// records are removed by the store's cascade rule.
    async fn delete(&self, slot_number: &str) -> DomainResult<()>;
}
