//! SeaORM implementation of VehicleRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::vehicle::{Vehicle, VehicleRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::vehicle;

pub struct SeaOrmVehicleRepository {
    db: DatabaseConnection,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_domain(m: vehicle::Model) -> Vehicle {
    Vehicle {
        plate_number: m.plate_number,
        driver_name: m.driver_name,
        phone_number: m.phone_number,
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn create(&self, new_vehicle: Vehicle) -> DomainResult<Vehicle> {
        debug!("Registering vehicle: {}", new_vehicle.plate_number);

        let existing = vehicle::Entity::find_by_id(&new_vehicle.plate_number)
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!(
                "Vehicle {} is already registered",
                new_vehicle.plate_number
            )));
        }

        let model = vehicle::ActiveModel {
            plate_number: Set(new_vehicle.plate_number),
            driver_name: Set(new_vehicle.driver_name),
            phone_number: Set(new_vehicle.phone_number),
        };
        let inserted = model.insert(&self.db).await?;
        Ok(model_to_domain(inserted))
    }

    async fn find_all(&self) -> DomainResult<Vec<Vehicle>> {
        let models = vehicle::Entity::find()
            .order_by_asc(vehicle::Column::PlateNumber)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_plate(&self, plate_number: &str) -> DomainResult<Option<Vehicle>> {
        let model = vehicle::Entity::find_by_id(plate_number)
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }

    async fn update(&self, updated: Vehicle) -> DomainResult<Vehicle> {
        debug!("Updating vehicle: {}", updated.plate_number);

        let existing = vehicle::Entity::find_by_id(&updated.plate_number)
            .one(&self.db)
            .await?;
        let Some(existing) = existing else {
            return Err(DomainError::not_found(
                "Vehicle",
                "plate_number",
                updated.plate_number,
            ));
        };

        let mut active: vehicle::ActiveModel = existing.into();
        active.driver_name = Set(updated.driver_name);
        active.phone_number = Set(updated.phone_number);
        let saved = active.update(&self.db).await?;
        Ok(model_to_domain(saved))
    }

    async fn delete(&self, plate_number: &str) -> DomainResult<()> {
        debug!("Deleting vehicle: {}", plate_number);

        let result = vehicle::Entity::delete_by_id(plate_number)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(
                "Vehicle",
                "plate_number",
                plate_number,
            ));
        }
        Ok(())
    }
}
