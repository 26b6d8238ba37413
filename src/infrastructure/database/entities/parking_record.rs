//! Parking record entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parking_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub plate_number: String,
    pub slot_number: String,

    pub entry_time: DateTimeUtc,

    /// None while the vehicle is still parked
    #[sea_orm(nullable)]
    pub exit_time: Option<DateTimeUtc>,

    /// Billable minutes, written at check-out
    #[sea_orm(nullable)]
    pub duration_minutes: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::PlateNumber",
        to = "super::vehicle::Column::PlateNumber"
    )]
    Vehicle,

    #[sea_orm(
        belongs_to = "super::slot::Entity",
        from = "Column::SlotNumber",
        to = "super::slot::Column::SlotNumber"
    )]
    Slot,

    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Slot.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
