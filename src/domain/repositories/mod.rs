//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::payment::PaymentRepository;
use super::record::ParkingRecordRepository;
use super::slot::SlotRepository;
use super::user::UserRepository;
use super::vehicle::VehicleRepository;

pub use crate::shared::errors::DomainResult;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let slot = repos.slots().find_by_number("A1").await?;
///     let active = repos.records().find_active_detailed().await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn slots(&self) -> &dyn SlotRepository;
    fn vehicles(&self) -> &dyn VehicleRepository;
    fn records(&self) -> &dyn ParkingRecordRepository;
    fn payments(&self) -> &dyn PaymentRepository;
    fn users(&self) -> &dyn UserRepository;
}
