//! Create payments table

use sea_orm_migration::prelude::*;

use super::m20250101_000003_create_parking_records::ParkingRecords;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::RecordId).integer().not_null())
                    .col(
                        ColumnDef::new(Payments::AmountPaid)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Payments::PaymentTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_parking_record")
                            .from(Payments::Table, Payments::RecordId)
                            .to(ParkingRecords::Table, ParkingRecords::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payments_record")
                    .table(Payments::Table)
                    .col(Payments::RecordId)
                    .to_owned(),
            )
            .await?;

        // Index for the daily revenue report
        manager
            .create_index(
                Index::create()
                    .name("idx_payments_payment_time")
                    .table(Payments::Table)
                    .col(Payments::PaymentTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Payments {
    Table,
    Id,
    RecordId,
    AmountPaid,
    PaymentTime,
}
