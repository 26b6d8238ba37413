//! Parking record aggregate, the occupancy ledger core
//!
//! Contains the ParkingRecord entity, the fare arithmetic, and the
//! repository interface the check-in/check-out lifecycle runs through.

pub mod model;
pub mod repository;

pub use model::{FareBreakdown, ParkingRecord, ParkingRecordDetails, RATE_PER_HOUR};
pub use repository::ParkingRecordRepository;
