//! Payment aggregate

pub mod model;
pub mod repository;

pub use model::{Payment, PaymentDetails};
pub use repository::PaymentRepository;
