//! Create `vehicle` table.
//! `id` is client-assigned, so the primary key carries no auto-increment.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Vehicle::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Vehicle::Year).integer().not_null())
                    .col(ColumnDef::new(Vehicle::Make).text().not_null())
                    .col(ColumnDef::new(Vehicle::Model).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Year,
    Make,
    Model,
}
