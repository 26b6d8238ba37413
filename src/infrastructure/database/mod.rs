//! Database bootstrap
//!
//! Owns the SeaORM connection plus the entity, migration and repository
//! modules. Connection-URL derivation (config file vs `DATABASE_URL`)
//! lives in [`crate::config`]; this module only receives the final URL.

pub mod entities;
pub mod migrator;
pub mod repositories;

use sea_orm::{Database, DatabaseConnection};
use tracing::info;

/// Connection settings for the storage backend.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SeaORM connection URL, e.g. `sqlite://parkdesk.db?mode=rwc`.
    pub url: String,
}

/// Open the database connection and verify it answers.
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);
    let db = Database::connect(&config.url).await?;
    db.ping().await?;
    info!("Database connection established");
    Ok(db)
}
