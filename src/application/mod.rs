pub mod services;

// Re-export key types for convenience
pub use services::{Bill, BillingService, DailyReport, ParkingService};
