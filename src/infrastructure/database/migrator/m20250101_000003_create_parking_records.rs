//! Create parking_records table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_parking_slots::ParkingSlots;
use super::m20250101_000002_create_vehicles::Vehicles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParkingRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ParkingRecords::PlateNumber)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ParkingRecords::SlotNumber)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ParkingRecords::EntryTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ParkingRecords::ExitTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(ParkingRecords::DurationMinutes).big_integer())
                    // Deleting a vehicle or a slot intentionally destroys its
                    // occupancy history
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_records_vehicle")
                            .from(ParkingRecords::Table, ParkingRecords::PlateNumber)
                            .to(Vehicles::Table, Vehicles::PlateNumber)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_records_slot")
                            .from(ParkingRecords::Table, ParkingRecords::SlotNumber)
                            .to(ParkingSlots::Table, ParkingSlots::SlotNumber)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for per-vehicle history
        manager
            .create_index(
                Index::create()
                    .name("idx_parking_records_plate")
                    .table(ParkingRecords::Table)
                    .col(ParkingRecords::PlateNumber)
                    .to_owned(),
            )
            .await?;

        // Index for per-slot lookups during check-in/check-out
        manager
            .create_index(
                Index::create()
                    .name("idx_parking_records_slot")
                    .table(ParkingRecords::Table)
                    .col(ParkingRecords::SlotNumber)
                    .to_owned(),
            )
            .await?;

        // Index for active-record scans (exit_time IS NULL)
        manager
            .create_index(
                Index::create()
                    .name("idx_parking_records_exit_time")
                    .table(ParkingRecords::Table)
                    .col(ParkingRecords::ExitTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ParkingRecords {
    Table,
    Id,
    PlateNumber,
    SlotNumber,
    EntryTime,
    ExitTime,
    DurationMinutes,
}
