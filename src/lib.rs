//! # ParkDesk Parking Sales Service
//!
//! Sales management service for a parking facility: slot inventory,
//! vehicle registration, the check-in/check-out occupancy ledger and the
//! payment log, served over a JWT-protected REST API.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, fare arithmetic and repository traits
//! - **application**: Services orchestrating the domain operations
//! - **infrastructure**: SeaORM database layer, migrations, crypto
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Errors, validation helpers and shutdown plumbing

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
