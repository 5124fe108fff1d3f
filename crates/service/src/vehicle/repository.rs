use async_trait::async_trait;

use super::domain::Vehicle;
use super::errors::VehicleError;

/// Persistence contract the vehicle service depends on.
/// Listings come back in primary-key order; mutations report affected rows.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Vehicle>, VehicleError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, VehicleError>;
    async fn find_by_year(&self, year: i32) -> Result<Vec<Vehicle>, VehicleError>;
    async fn find_by_make(&self, make: &str) -> Result<Vec<Vehicle>, VehicleError>;
    async fn find_by_model(&self, model: &str) -> Result<Vec<Vehicle>, VehicleError>;
    async fn id_exists(&self, id: i32) -> Result<bool, VehicleError>;

    async fn insert(&self, vehicle: &Vehicle) -> Result<(), VehicleError>;
    async fn update_year(&self, id: i32, year: i32) -> Result<u64, VehicleError>;
    async fn update_make(&self, id: i32, make: &str) -> Result<u64, VehicleError>;
    async fn update_model(&self, id: i32, model: &str) -> Result<u64, VehicleError>;
    async fn delete(&self, id: i32) -> Result<u64, VehicleError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    #[derive(Default)]
    pub struct InMemoryVehicleStore {
        rows: Mutex<BTreeMap<i32, Vehicle>>, // key: id, iteration gives primary-key order
    }

    impl InMemoryVehicleStore {
        pub fn with_rows(rows: impl IntoIterator<Item = Vehicle>) -> Self {
            Self { rows: Mutex::new(rows.into_iter().map(|v| (v.id, v)).collect()) }
        }

        fn rows(&self) -> MutexGuard<'_, BTreeMap<i32, Vehicle>> {
            self.rows.lock().unwrap_or_else(PoisonError::into_inner)
        }

        fn matching(&self, pred: impl Fn(&Vehicle) -> bool) -> Vec<Vehicle> {
            self.rows().values().filter(|v| pred(v)).cloned().collect()
        }

        fn modify(&self, id: i32, f: impl FnOnce(&mut Vehicle)) -> u64 {
            match self.rows().get_mut(&id) {
                Some(v) => { f(v); 1 }
                None => 0,
            }
        }
    }

    #[async_trait]
    impl VehicleStore for InMemoryVehicleStore {
        async fn list_all(&self) -> Result<Vec<Vehicle>, VehicleError> {
            Ok(self.rows().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, VehicleError> {
            Ok(self.rows().get(&id).cloned())
        }

        async fn find_by_year(&self, year: i32) -> Result<Vec<Vehicle>, VehicleError> {
            Ok(self.matching(|v| v.year == year))
        }

        async fn find_by_make(&self, make: &str) -> Result<Vec<Vehicle>, VehicleError> {
            Ok(self.matching(|v| v.make == make))
        }

        async fn find_by_model(&self, model: &str) -> Result<Vec<Vehicle>, VehicleError> {
            Ok(self.matching(|v| v.model == model))
        }

        async fn id_exists(&self, id: i32) -> Result<bool, VehicleError> {
            Ok(self.rows().contains_key(&id))
        }

        async fn insert(&self, vehicle: &Vehicle) -> Result<(), VehicleError> {
            let mut rows = self.rows();
            if rows.contains_key(&vehicle.id) {
                return Err(VehicleError::IdConflict);
            }
            rows.insert(vehicle.id, vehicle.clone());
            Ok(())
        }

        async fn update_year(&self, id: i32, year: i32) -> Result<u64, VehicleError> {
            Ok(self.modify(id, |v| v.year = year))
        }

        async fn update_make(&self, id: i32, make: &str) -> Result<u64, VehicleError> {
            Ok(self.modify(id, |v| v.make = make.to_string()))
        }

        async fn update_model(&self, id: i32, model: &str) -> Result<u64, VehicleError> {
            Ok(self.modify(id, |v| v.model = model.to_string()))
        }

        async fn delete(&self, id: i32) -> Result<u64, VehicleError> {
            Ok(self.rows().remove(&id).map_or(0, |_| 1))
        }
    }
}
