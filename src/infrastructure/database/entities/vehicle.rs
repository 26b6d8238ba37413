//! Vehicle entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub plate_number: String,
    pub driver_name: String,
    pub phone_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::parking_record::Entity")]
    ParkingRecords,
}

impl Related<super::parking_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
