//! Create rides table
//!
//! One open ride per bike at a time; rows are closed by setting ended_at.

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_bikes::Bikes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rides::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rides::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Rides::BikeId).uuid().not_null())
                    .col(ColumnDef::new(Rides::UserId).string().not_null())
                    .col(
                        ColumnDef::new(Rides::StartedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Rides::EndedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rides_bike")
                            .from(Rides::Table, Rides::BikeId)
                            .to(Bikes::Table, Bikes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rides_bike")
                    .table(Rides::Table)
                    .col(Rides::BikeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rides_user")
                    .table(Rides::Table)
                    .col(Rides::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rides::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Rides {
    Table,
    Id,
    BikeId,
    UserId,
    StartedAt,
    EndedAt,
}
