//! Payment entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub record_id: i32,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount_paid: Decimal,

    pub payment_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parking_record::Entity",
        from = "Column::RecordId",
        to = "super::parking_record::Column::Id"
    )]
    ParkingRecord,
}

impl Related<super::parking_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
