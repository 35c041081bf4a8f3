//! Ride entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rides")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub bike_id: Uuid,
    pub user_id: String,

    pub started_at: DateTimeUtc,

    #[sea_orm(nullable)]
    pub ended_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bike::Entity",
        from = "Column::BikeId",
        to = "super::bike::Column::Id"
    )]
    Bike,
}

impl Related<super::bike::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bike.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
