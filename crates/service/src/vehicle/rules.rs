//! Validation rules for vehicle mutations.
//!
//! Everything here is pure: callers look up whatever existence facts a rule
//! needs and pass them in as booleans. Each rule reports the most fundamental
//! problem first, so the check order inside a rule is part of its contract.

use super::domain::{Vehicle, VehicleInput};
use super::errors::VehicleError;

pub const MIN_YEAR: i32 = 1950;
pub const MAX_YEAR: i32 = 2050;

/// True iff `year` lies in the closed range 1950..=2050.
pub fn validate_year(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// Check a create request: missing fields, then id conflict, then year range.
///
/// # Examples
/// ```
/// use service::vehicle::{rules, VehicleError, VehicleInput};
/// let input = VehicleInput { id: Some(3), year: Some(1900), make: Some("Ford".into()), model: Some("T".into()) };
/// assert_eq!(rules::validate_create(&input, false), Err(VehicleError::InvalidYear));
/// assert_eq!(rules::validate_create(&input, true), Err(VehicleError::IdConflict));
/// ```
pub fn validate_create(input: &VehicleInput, id_exists: bool) -> Result<Vehicle, VehicleError> {
    let vehicle = input.complete().ok_or(VehicleError::MissingFields)?;
    if id_exists {
        return Err(VehicleError::IdConflict);
    }
    if !validate_year(vehicle.year) {
        return Err(VehicleError::InvalidYear);
    }
    Ok(vehicle)
}

/// The writes an update request resolves to once its target is known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    pub id: i32,
    /// only set when the requested year is in range
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    /// an out-of-range year that was dropped from the plan
    pub rejected_year: Option<i32>,
}

impl UpdatePlan {
    /// `InvalidYear` when the request carried an out-of-range year.
    pub fn check(&self) -> Result<(), VehicleError> {
        match self.rejected_year {
            Some(_) => Err(VehicleError::InvalidYear),
            None => Ok(()),
        }
    }
}

/// Resolve an update request: missing id, then unknown id. The year is gated
/// on validity but does not fail the plan; see [`UpdatePlan::check`].
pub fn plan_update(input: VehicleInput, id_exists: bool) -> Result<UpdatePlan, VehicleError> {
    let id = input.id.ok_or(VehicleError::MissingId)?;
    if !id_exists {
        return Err(VehicleError::IdNotFound);
    }
    let (year, rejected_year) = match input.year {
        Some(y) if validate_year(y) => (Some(y), None),
        Some(y) => (None, Some(y)),
        None => (None, None),
    };
    Ok(UpdatePlan { id, year, make: input.make, model: input.model, rejected_year })
}

/// Check an update request: missing id, then unknown id, then year range.
pub fn validate_update(input: &VehicleInput, id_exists: bool) -> Result<(), VehicleError> {
    plan_update(input.clone(), id_exists)?.check()
}

/// A delete succeeds only if it removed a row.
pub fn validate_deletion(delete_count: u64) -> Result<(), VehicleError> {
    if delete_count > 0 {
        Ok(())
    } else {
        Err(VehicleError::not_found_delete())
    }
}

/// A fetch succeeds only if the store returned a row.
pub fn validate_fetch(found: Option<Vehicle>) -> Result<Vehicle, VehicleError> {
    found.ok_or_else(VehicleError::not_found_get)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(id: i32, year: i32) -> VehicleInput {
        VehicleInput { id: Some(id), year: Some(year), make: Some("Tesla".into()), model: Some("S".into()) }
    }

    #[test]
    fn year_bounds_are_inclusive() {
        for y in [i32::MIN, 0, 1900, 1949, 2051, 2100, i32::MAX] {
            assert!(!validate_year(y), "{y} should be rejected");
        }
        for y in [1950, 1951, 2000, 2049, 2050] {
            assert!(validate_year(y), "{y} should be accepted");
        }
    }

    #[test]
    fn any_missing_field_is_reported_before_anything_else() {
        let base = full(1, 1900);
        let variants = [
            VehicleInput { id: None, ..base.clone() },
            VehicleInput { year: None, ..base.clone() },
            VehicleInput { make: None, ..base.clone() },
            VehicleInput { model: None, ..base.clone() },
            VehicleInput::default(),
        ];
        for v in variants {
            // conflict and bad year are both present, missing fields still wins
            assert_eq!(validate_create(&v, true), Err(VehicleError::MissingFields), "{v:?}");
        }
    }

    #[test]
    fn conflict_is_reported_before_year() {
        assert_eq!(validate_create(&full(1, 2100), true), Err(VehicleError::IdConflict));
        assert_eq!(validate_create(&full(1, 2100), false), Err(VehicleError::InvalidYear));
        assert_eq!(validate_create(&full(1, 1900), false), Err(VehicleError::InvalidYear));
    }

    #[test]
    fn valid_create_yields_the_vehicle() {
        let v = validate_create(&full(1, 2012), false).unwrap();
        assert_eq!(v, Vehicle { id: 1, year: 2012, make: "Tesla".into(), model: "S".into() });
    }

    #[test]
    fn update_checks_run_in_order() {
        let no_id = VehicleInput { id: None, year: Some(1900), ..Default::default() };
        assert_eq!(validate_update(&no_id, false), Err(VehicleError::MissingId));

        let bad_year = VehicleInput { id: Some(9), year: Some(1900), ..Default::default() };
        assert_eq!(validate_update(&bad_year, false), Err(VehicleError::IdNotFound));
        assert_eq!(validate_update(&bad_year, true), Err(VehicleError::InvalidYear));

        let make_only = VehicleInput { id: Some(9), make: Some("Ford".into()), ..Default::default() };
        assert_eq!(validate_update(&make_only, true), Ok(()));
    }

    #[test]
    fn plan_keeps_valid_fields_and_sets_aside_a_bad_year() {
        let input = VehicleInput { id: Some(2), year: Some(2100), make: Some("Ford".into()), model: None };
        let plan = plan_update(input, true).unwrap();
        assert_eq!(plan.year, None);
        assert_eq!(plan.rejected_year, Some(2100));
        assert_eq!(plan.make.as_deref(), Some("Ford"));
        assert_eq!(plan.check(), Err(VehicleError::InvalidYear));

        let only_id = plan_update(VehicleInput { id: Some(2), ..Default::default() }, true).unwrap();
        assert_eq!(only_id.check(), Ok(()));
        assert_eq!((only_id.year, only_id.make, only_id.model), (None, None, None));
    }

    #[test]
    fn deletion_and_fetch() {
        assert_eq!(validate_deletion(1), Ok(()));
        assert_eq!(validate_deletion(0), Err(VehicleError::not_found_delete()));
        assert_eq!(validate_fetch(None), Err(VehicleError::not_found_get()));
        let v = Vehicle { id: 1, year: 2012, make: "Tesla".into(), model: "S".into() };
        assert_eq!(validate_fetch(Some(v.clone())), Ok(v));
    }
}
