use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{ListFilter, Vehicle, VehicleInput};
use super::errors::VehicleError;
use super::query;
use super::repository::VehicleStore;
use super::rules::{self, UpdatePlan};
use configs::UpdateMode;

/// Vehicle business service independent of web framework and storage engine.
pub struct VehicleService<S: VehicleStore + ?Sized> {
    store: Arc<S>,
    mode: UpdateMode,
}

impl<S: VehicleStore + ?Sized> VehicleService<S> {
    pub fn new(store: Arc<S>) -> Self { Self::with_mode(store, UpdateMode::default()) }

    pub fn with_mode(store: Arc<S>, mode: UpdateMode) -> Self { Self { store, mode } }

    /// Every vehicle, or the union of the matches for each given criterion.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: ListFilter) -> Result<Vec<Vehicle>, VehicleError> {
        let filter = filter.normalized();
        let rows = query::list_vehicles(self.store.as_ref(), &filter).await?;
        info!(count = rows.len(), "list vehicles");
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Vehicle, VehicleError> {
        let found = match self.store.find_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                warn!(err = %e, "fetch failed; reporting as not found");
                None
            }
        };
        rules::validate_fetch(found)
    }

    /// Create a vehicle from a complete input.
    ///
    /// # Examples
    /// ```
    /// use service::vehicle::{VehicleService, VehicleInput, VehicleError};
    /// use service::vehicle::repository::mock::InMemoryVehicleStore;
    /// use std::sync::Arc;
    /// let svc = VehicleService::new(Arc::new(InMemoryVehicleStore::default()));
    /// let input = VehicleInput { id: Some(1), year: Some(2012), make: Some("Tesla".into()), model: Some("S".into()) };
    /// let created = tokio_test::block_on(svc.create(input.clone())).unwrap();
    /// assert_eq!(created.make, "Tesla");
    /// assert_eq!(tokio_test::block_on(svc.create(input)), Err(VehicleError::IdConflict));
    /// ```
    #[instrument(skip(self, input), fields(id = ?input.id))]
    pub async fn create(&self, input: VehicleInput) -> Result<Vehicle, VehicleError> {
        let input = input.normalized();
        // nothing to look up without a complete request
        let Some(candidate) = input.complete() else {
            return Err(VehicleError::MissingFields);
        };
        let exists = self.store.id_exists(candidate.id).await?;
        let vehicle = rules::validate_create(&input, exists)?;
        if let Err(e) = self.store.insert(&vehicle).await {
            // lost a race with a concurrent create, or the store refused the row
            warn!(err = %e, id = vehicle.id, "insert failed after validation");
            return Err(VehicleError::IdConflict);
        }
        info!(id = vehicle.id, year = vehicle.year, make = %vehicle.make, model = %vehicle.model, "vehicle_created");
        Ok(vehicle)
    }

    /// Apply the fields present in `input` to the vehicle it names.
    ///
    /// With [`UpdateMode::Partial`] a valid make/model is written even when the
    /// year is out of range, and `InvalidYear` is returned afterwards. With
    /// [`UpdateMode::Atomic`] an out-of-range year rejects the whole request.
    ///
    /// `make` and `model` are trimmed first; a blank value counts as absent and
    /// leaves the stored field unchanged, so `{"id": 1, "make": ""}` succeeds
    /// without writing anything.
    #[instrument(skip(self, input), fields(id = ?input.id, mode = ?self.mode))]
    pub async fn update(&self, input: VehicleInput) -> Result<Vehicle, VehicleError> {
        let input = input.normalized();
        let Some(id) = input.id else {
            return Err(VehicleError::MissingId);
        };
        let exists = self.store.id_exists(id).await?;
        let plan = rules::plan_update(input, exists)?;

        if self.mode == UpdateMode::Atomic {
            plan.check()?;
        }
        self.apply(&plan).await?;
        if let Some(year) = plan.rejected_year {
            warn!(id, year, "year rejected; other fields applied");
        }
        plan.check()?;

        let updated = self.store.find_by_id(id).await?.ok_or(VehicleError::IdNotFound)?;
        info!(id, "vehicle_updated");
        Ok(updated)
    }

    async fn apply(&self, plan: &UpdatePlan) -> Result<(), VehicleError> {
        let id = plan.id;
        if let Some(year) = plan.year {
            affected(self.store.update_year(id, year).await?)?;
        }
        if let Some(make) = plan.make.as_deref() {
            affected(self.store.update_make(id, make).await?)?;
        }
        if let Some(model) = plan.model.as_deref() {
            affected(self.store.update_model(id, model).await?)?;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), VehicleError> {
        let count = match self.store.delete(id).await {
            Ok(n) => n,
            Err(e) => {
                warn!(err = %e, "delete failed; reporting as not found");
                0
            }
        };
        rules::validate_deletion(count)?;
        info!(id, "vehicle_deleted");
        Ok(())
    }
}

// the row vanished between the existence check and the write
fn affected(rows: u64) -> Result<(), VehicleError> {
    if rows == 0 { Err(VehicleError::IdNotFound) } else { Ok(()) }
}
