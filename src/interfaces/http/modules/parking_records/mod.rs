//! Occupancy ledger module: check-in, check-out, record views

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
