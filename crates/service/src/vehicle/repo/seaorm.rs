use sea_orm::DatabaseConnection;

use models::vehicle;

use crate::vehicle::domain::Vehicle;
use crate::vehicle::errors::VehicleError;
use crate::vehicle::repository::VehicleStore;

/// SeaORM-backed store over the `vehicle` table.
#[derive(Clone)]
pub struct SeaOrmVehicleStore {
    pub db: DatabaseConnection,
}

impl SeaOrmVehicleStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn to_domain(m: vehicle::Model) -> Vehicle {
    Vehicle { id: m.id, year: m.year, make: m.make, model: m.model }
}

fn to_domain_all(rows: Vec<vehicle::Model>) -> Vec<Vehicle> {
    rows.into_iter().map(to_domain).collect()
}

#[async_trait::async_trait]
impl VehicleStore for SeaOrmVehicleStore {
    async fn list_all(&self) -> Result<Vec<Vehicle>, VehicleError> {
        Ok(to_domain_all(vehicle::list_all(&self.db).await?))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, VehicleError> {
        Ok(vehicle::find_by_id(&self.db, id).await?.map(to_domain))
    }

    async fn find_by_year(&self, year: i32) -> Result<Vec<Vehicle>, VehicleError> {
        Ok(to_domain_all(vehicle::find_by_year(&self.db, year).await?))
    }

    async fn find_by_make(&self, make: &str) -> Result<Vec<Vehicle>, VehicleError> {
        Ok(to_domain_all(vehicle::find_by_make(&self.db, make).await?))
    }

    async fn find_by_model(&self, model: &str) -> Result<Vec<Vehicle>, VehicleError> {
        Ok(to_domain_all(vehicle::find_by_model(&self.db, model).await?))
    }

    async fn id_exists(&self, id: i32) -> Result<bool, VehicleError> {
        Ok(vehicle::id_exists(&self.db, id).await?)
    }

    async fn insert(&self, v: &Vehicle) -> Result<(), VehicleError> {
        let row = vehicle::Model { id: v.id, year: v.year, make: v.make.clone(), model: v.model.clone() };
        vehicle::insert(&self.db, row).await?;
        Ok(())
    }

    async fn update_year(&self, id: i32, year: i32) -> Result<u64, VehicleError> {
        Ok(vehicle::set_year(&self.db, id, year).await?)
    }

    async fn update_make(&self, id: i32, make: &str) -> Result<u64, VehicleError> {
        Ok(vehicle::set_make(&self.db, id, make).await?)
    }

    async fn update_model(&self, id: i32, model: &str) -> Result<u64, VehicleError> {
        Ok(vehicle::set_model(&self.db, id, model).await?)
    }

    async fn delete(&self, id: i32) -> Result<u64, VehicleError> {
        Ok(vehicle::delete(&self.db, id).await?)
    }
}
