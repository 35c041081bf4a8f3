//! Booking entity
//!
//! No status column: lifecycle status is derived from the timestamps at
//! read time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub bike_id: Uuid,
    pub user_id: String,

    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,

    #[sea_orm(nullable)]
    pub cancelled_at: Option<DateTimeUtc>,

    /// Cents, written by the external billing step after the ride
    #[sea_orm(nullable)]
    pub total_cost: Option<i32>,

    pub created_at: DateTimeUtc,
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
