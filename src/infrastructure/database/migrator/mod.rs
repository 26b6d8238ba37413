//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_parking_slots;
mod m20250101_000002_create_vehicles;
mod m20250101_000003_create_parking_records;
mod m20250101_000004_create_payments;
mod m20250101_000005_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_parking_slots::Migration),
            Box::new(m20250101_000002_create_vehicles::Migration),
            Box::new(m20250101_000003_create_parking_records::Migration),
            Box::new(m20250101_000004_create_payments::Migration),
            Box::new(m20250101_000005_create_users::Migration),
        ]
    }
}
