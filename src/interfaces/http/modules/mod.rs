pub mod auth;
pub mod health;
pub mod metrics;
pub mod parking_records;
pub mod payments;
pub mod request_id;
pub mod slots;
pub mod vehicles;
