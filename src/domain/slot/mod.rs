//! Slot aggregate
//!
//! Contains the ParkingSlot entity, its status type, and repository interface.

pub mod model;
pub mod repository;

pub use model::{ParkingSlot, SlotStatus};
pub use repository::SlotRepository;
