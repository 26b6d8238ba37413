//! SeaORM implementation of ParkingRecordRepository
//!
//! Check-in and check-out are multi-step mutations (availability check,
//! record write, slot flip) and run inside a single database transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::record::{
    FareBreakdown, ParkingRecord, ParkingRecordDetails, ParkingRecordRepository,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{parking_record, slot, vehicle};

use super::slot_repository::status_to_domain;

pub struct SeaOrmParkingRecordRepository {
    db: DatabaseConnection,
}

impl SeaOrmParkingRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach driver and slot context to (record, vehicle) pairs coming out
    /// of a joined query. Slot statuses are fetched in one batched lookup.
    async fn assemble_details(
        &self,
        rows: Vec<(parking_record::Model, Option<vehicle::Model>)>,
    ) -> DomainResult<Vec<ParkingRecordDetails>> {
        let slot_numbers: Vec<String> = rows.iter().map(|(r, _)| r.slot_number.clone()).collect();
        let statuses: HashMap<String, slot::SlotStatus> = slot::Entity::find()
            .filter(slot::Column::SlotNumber.is_in(slot_numbers))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|s| (s.slot_number, s.slot_status))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|(record, veh)| {
                let veh = veh?;
                let status = statuses.get(&record.slot_number).cloned()?;
                Some(ParkingRecordDetails {
                    record: model_to_domain(record),
                    driver_name: veh.driver_name,
                    phone_number: veh.phone_number,
                    slot_status: status_to_domain(status),
                })
            })
            .collect())
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: parking_record::Model) -> ParkingRecord {
    ParkingRecord {
        id: m.id,
        plate_number: m.plate_number,
        slot_number: m.slot_number,
        entry_time: m.entry_time,
        exit_time: m.exit_time,
        duration_minutes: m.duration_minutes,
    }
}

// ── ParkingRecordRepository impl ────────────────────────────────

#[async_trait]
impl ParkingRecordRepository for SeaOrmParkingRecordRepository {
    async fn check_in(
        &self,
        plate_number: &str,
        slot_number: &str,
        entry_time: DateTime<Utc>,
    ) -> DomainResult<i32> {
        debug!("Checking {} into slot {}", plate_number, slot_number);

        let txn = self.db.begin().await?;

        let slot_row = slot::Entity::find_by_id(slot_number).one(&txn).await?;
        let Some(slot_row) = slot_row else {
            return Err(DomainError::not_found("Slot", "slot_number", slot_number));
        };
        if slot_row.slot_status != slot::SlotStatus::Available {
            return Err(DomainError::InvalidState("Slot is not available".to_string()));
        }

        let record = parking_record::ActiveModel {
            plate_number: Set(plate_number.to_string()),
            slot_number: Set(slot_number.to_string()),
            entry_time: Set(entry_time),
            exit_time: Set(None),
            duration_minutes: Set(None),
            ..Default::default()
        };
        let inserted = record.insert(&txn).await?;

        let mut occupied: slot::ActiveModel = slot_row.into();
        occupied.slot_status = Set(slot::SlotStatus::Occupied);
        occupied.update(&txn).await?;

        txn.commit().await?;
        Ok(inserted.id)
    }

    async fn check_out(
        &self,
        record_id: i32,
        exit_time: DateTime<Utc>,
    ) -> DomainResult<FareBreakdown> {
        debug!("Checking out record {}", record_id);

        let txn = self.db.begin().await?;

        let record = parking_record::Entity::find_by_id(record_id)
            .one(&txn)
            .await?;
        let Some(record) = record else {
            return Err(DomainError::not_found(
                "Parking record",
                "id",
                record_id.to_string(),
            ));
        };

        let fare = FareBreakdown::for_interval(record.entry_time, exit_time);
        let slot_number = record.slot_number.clone();

        let mut closed: parking_record::ActiveModel = record.into();
        closed.exit_time = Set(Some(exit_time));
        closed.duration_minutes = Set(Some(fare.duration_minutes));
        closed.update(&txn).await?;

        if let Some(slot_row) = slot::Entity::find_by_id(&slot_number).one(&txn).await? {
            let mut freed: slot::ActiveModel = slot_row.into();
            freed.slot_status = Set(slot::SlotStatus::Available);
            freed.update(&txn).await?;
        }

        txn.commit().await?;
        Ok(fare)
    }

    async fn find_all_detailed(&self) -> DomainResult<Vec<ParkingRecordDetails>> {
        let rows = parking_record::Entity::find()
            .find_also_related(vehicle::Entity)
            .order_by_desc(parking_record::Column::EntryTime)
            .all(&self.db)
            .await?;
        self.assemble_details(rows).await
    }

    async fn find_active_detailed(&self) -> DomainResult<Vec<ParkingRecordDetails>> {
        let rows = parking_record::Entity::find()
            .filter(parking_record::Column::ExitTime.is_null())
            .find_also_related(vehicle::Entity)
            .order_by_desc(parking_record::Column::EntryTime)
            .all(&self.db)
            .await?;
        self.assemble_details(rows).await
    }

    async fn find_detailed_by_id(&self, id: i32) -> DomainResult<Option<ParkingRecordDetails>> {
        let row = parking_record::Entity::find_by_id(id)
            .find_also_related(vehicle::Entity)
            .one(&self.db)
            .await?;
        match row {
            Some(pair) => Ok(self.assemble_details(vec![pair]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        debug!("Deleting record: {}", id);

        let result = parking_record::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(
                "Parking record",
                "id",
                id.to_string(),
            ));
        }
        Ok(())
    }
}
