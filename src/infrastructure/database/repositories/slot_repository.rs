//! SeaORM implementation of SlotRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::slot::{ParkingSlot, SlotRepository, SlotStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::slot;

pub struct SeaOrmSlotRepository {
    db: DatabaseConnection,
}

impl SeaOrmSlotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn status_to_entity(status: SlotStatus) -> slot::SlotStatus {
    match status {
        SlotStatus::Available => slot::SlotStatus::Available,
        SlotStatus::Occupied => slot::SlotStatus::Occupied,
        SlotStatus::Maintenance => slot::SlotStatus::Maintenance,
    }
}

pub(crate) fn status_to_domain(status: slot::SlotStatus) -> SlotStatus {
    match status {
        slot::SlotStatus::Available => SlotStatus::Available,
        slot::SlotStatus::Occupied => SlotStatus::Occupied,
        slot::SlotStatus::Maintenance => SlotStatus::Maintenance,
    }
}

pub(crate) fn model_to_domain(m: slot::Model) -> ParkingSlot {
    ParkingSlot {
        slot_number: m.slot_number,
        status: status_to_domain(m.slot_status),
    }
}

// ── SlotRepository impl ─────────────────────────────────────────

#[async_trait]
impl SlotRepository for SeaOrmSlotRepository {
    async fn create(&self, new_slot: ParkingSlot) -> DomainResult<ParkingSlot> {
        debug!("Creating slot: {}", new_slot.slot_number);

        let existing = slot::Entity::find_by_id(&new_slot.slot_number)
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!(
                "Slot {} already exists",
                new_slot.slot_number
            )));
        }

        let model = slot::ActiveModel {
            slot_number: Set(new_slot.slot_number),
            slot_status: Set(status_to_entity(new_slot.status)),
        };
        let inserted = model.insert(&self.db).await?;
        Ok(model_to_domain(inserted))
    }

    async fn find_all(&self) -> DomainResult<Vec<ParkingSlot>> {
        let models = slot::Entity::find()
            .order_by_asc(slot::Column::SlotNumber)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_available(&self) -> DomainResult<Vec<ParkingSlot>> {
        let models = slot::Entity::find()
            .filter(slot::Column::SlotStatus.eq(slot::SlotStatus::Available))
            .order_by_asc(slot::Column::SlotNumber)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_number(&self, slot_number: &str) -> DomainResult<Option<ParkingSlot>> {
        let model = slot::Entity::find_by_id(slot_number).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn update_status(
        &self,
        slot_number: &str,
        status: SlotStatus,
    ) -> DomainResult<ParkingSlot> {
        debug!("Updating slot {} to {}", slot_number, status.as_str());

        let existing = slot::Entity::find_by_id(slot_number).one(&self.db).await?;
        let Some(existing) = existing else {
            return Err(DomainError::not_found("Slot", "slot_number", slot_number));
        };

        let mut active: slot::ActiveModel = existing.into();
        active.slot_status = Set(status_to_entity(status));
        let updated = active.update(&self.db).await?;
        Ok(model_to_domain(updated))
    }

    async fn delete(&self, slot_number: &str) -> DomainResult<()> {
        debug!("Deleting slot: {}", slot_number);

        let result = slot::Entity::delete_by_id(slot_number).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Slot", "slot_number", slot_number));
        }
        Ok(())
    }
}
