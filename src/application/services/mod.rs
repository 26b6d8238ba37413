//! Application services

mod billing;
mod parking;

pub use billing::{Bill, BillingService, DailyReport};
pub use parking::ParkingService;
