//! Secondary indexes backing the per-field listing lookups.
use sea_orm_migration::prelude::*;

use crate::m20220101_000001_create_vehicle::Vehicle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, col) in [
            ("idx_vehicle_year", Vehicle::Year),
            ("idx_vehicle_make", Vehicle::Make),
            ("idx_vehicle_model", Vehicle::Model),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Vehicle::Table)
                        .col(col)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in ["idx_vehicle_year", "idx_vehicle_make", "idx_vehicle_model"] {
            manager
                .drop_index(Index::drop().name(name).table(Vehicle::Table).to_owned())
                .await?;
        }
        Ok(())
    }
}
