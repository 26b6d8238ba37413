//! Database entities module

pub mod parking_record;
pub mod payment;
pub mod slot;
pub mod user;
pub mod vehicle;

pub use parking_record::Entity as ParkingRecord;
pub use payment::Entity as Payment;
pub use slot::Entity as Slot;
pub use user::Entity as User;
pub use vehicle::Entity as Vehicle;
