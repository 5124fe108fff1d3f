//! Listing composition.
//!
//! Criteria are OR-combined: each present criterion is looked up on its own,
//! in the fixed order year, make, model, and the hits are merged into one
//! sequence that keeps first-seen order and holds each vehicle once.

use std::collections::HashSet;

use tracing::debug;

use super::domain::{ListFilter, Vehicle};
use super::errors::VehicleError;
use super::repository::VehicleStore;

/// Ordered accumulator with O(1) membership by full-field equality.
#[derive(Debug, Default)]
pub struct Listing {
    rows: Vec<Vehicle>,
    seen: HashSet<Vehicle>,
}

impl Listing {
    /// Append every vehicle not already present; returns how many were new.
    pub fn extend(&mut self, batch: impl IntoIterator<Item = Vehicle>) -> usize {
        let before = self.rows.len();
        for v in batch {
            if !self.seen.contains(&v) {
                self.seen.insert(v.clone());
                self.rows.push(v);
            }
        }
        self.rows.len() - before
    }

    pub fn into_vec(self) -> Vec<Vehicle> { self.rows }
}

/// Full listing when no criterion is given, otherwise the deduplicated union
/// of the per-criterion matches.
///
/// # Examples
/// ```
/// use service::vehicle::{query, ListFilter, Vehicle};
/// use service::vehicle::repository::mock::InMemoryVehicleStore;
/// let store = InMemoryVehicleStore::with_rows([
///     Vehicle { id: 1, year: 2012, make: "Toyota".into(), model: "S".into() },
///     Vehicle { id: 2, year: 2012, make: "Tesla".into(), model: "S".into() },
/// ]);
/// let filter = ListFilter { year: Some(2012), model: Some("S".into()), ..Default::default() };
/// let rows = tokio_test::block_on(query::list_vehicles(&store, &filter)).unwrap();
/// assert_eq!(rows.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub async fn list_vehicles<S>(store: &S, filter: &ListFilter) -> Result<Vec<Vehicle>, VehicleError>
where
    S: VehicleStore + ?Sized,
{
    if filter.is_empty() {
        return store.list_all().await;
    }

    let mut listing = Listing::default();
    if let Some(year) = filter.year {
        let added = listing.extend(store.find_by_year(year).await?);
        debug!(year, added, "merged year matches");
    }
    if let Some(make) = filter.make.as_deref() {
        let added = listing.extend(store.find_by_make(make).await?);
        debug!(make, added, "merged make matches");
    }
    if let Some(model) = filter.model.as_deref() {
        let added = listing.extend(store.find_by_model(model).await?);
        debug!(model, added, "merged model matches");
    }
    Ok(listing.into_vec())
}
