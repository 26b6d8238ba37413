//! Payment log module: payments, daily reports, bills

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
