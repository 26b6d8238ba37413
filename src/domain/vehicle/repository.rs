//! Vehicle repository interface

use async_trait::async_trait;

use super::model::Vehicle;
use crate::domain::DomainResult;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Fails with `Conflict` if the plate is already registered.
    async fn create(&self, vehicle: Vehicle) -> DomainResult<Vehicle>;
    /// All vehicles ordered by plate number.
    async fn find_all(&self) -> DomainResult<Vec<Vehicle>>;
    async fn find_by_plate(&self, plate_number: &str) -> DomainResult<Option<Vehicle>>;
    /// Updates driver name and phone; the plate itself is immutable.
    /// Fails with `NotFound` if the plate is not registered.
    async fn update(&self, vehicle: Vehicle) -> DomainResult<Vehicle>;
    /// Fails with `NotFound` if the plate is not registered. Dependent
    /// occupancy records are removed by the store's cascade rule.
    async fn delete(&self, plate_number: &str) -> DomainResult<()>;
}
