//! Create bikes table
//!
//! Minimal catalog record: the fleet itself is managed externally, the
//! engine only needs a row to reference and an existence check.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bikes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bikes::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Bikes::Label)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Bikes::DisplayName).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bikes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Bikes {
    Table,
    Id,
    Label,
    DisplayName,
}
