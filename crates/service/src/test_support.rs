#![cfg(test)]
use std::sync::Arc;

use configs::DatabaseConfig;

use crate::vehicle::repo::seaorm::SeaOrmVehicleStore;
use crate::vehicle::repository::mock::InMemoryVehicleStore;
use crate::vehicle::{UpdateMode, Vehicle, VehicleService};

/// Each call gets its own in-memory SQLite database with the schema applied.
pub async fn sqlite_store() -> Result<SeaOrmVehicleStore, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = crate::runtime::prepare_database(&cfg).await?;
    Ok(SeaOrmVehicleStore::new(db))
}

pub fn memory_service(mode: UpdateMode, rows: impl IntoIterator<Item = Vehicle>) -> VehicleService<InMemoryVehicleStore> {
    VehicleService::with_mode(Arc::new(InMemoryVehicleStore::with_rows(rows)), mode)
}

pub fn vehicle(id: i32, year: i32, make: &str, model: &str) -> Vehicle {
    Vehicle { id, year, make: make.into(), model: model.into() }
}
