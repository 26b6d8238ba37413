pub mod payment;
pub mod record;
pub mod repositories;
pub mod slot;
pub mod user;
pub mod vehicle;

// Re-export commonly used types
pub use payment::{Payment, PaymentDetails};
pub use record::{FareBreakdown, ParkingRecord, ParkingRecordDetails, RATE_PER_HOUR};
pub use repositories::{DomainResult, RepositoryProvider};
pub use slot::{ParkingSlot, SlotStatus};
pub use user::User;
pub use vehicle::Vehicle;

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
