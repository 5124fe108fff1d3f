use thiserror::Error;

use models::errors::ModelError;

/// Failures surfaced by vehicle operations. The display string is the
/// human-readable reason returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VehicleError {
    #[error("Cannot create vehicle with missing values in request body")]
    MissingFields,
    #[error("ID of Vehicle Already Exists")]
    IdConflict,
    #[error("Vehicle year must be between 1950 and 2050")]
    InvalidYear,
    #[error("Cannot change vehicle properties without ID")]
    MissingId,
    #[error("Cannot change properties of non-existent vehicle")]
    IdNotFound,
    #[error("{0}")]
    NotFound(String),
    #[error("store error: {0}")]
    Store(String),
}

impl VehicleError {
    pub fn not_found_get() -> Self { Self::NotFound("Cannot get non-existent vehicle".into()) }
    pub fn not_found_delete() -> Self { Self::NotFound("Cannot delete non-existent vehicle".into()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            VehicleError::MissingFields => 2001,
            VehicleError::IdConflict => 2002,
            VehicleError::InvalidYear => 2003,
            VehicleError::MissingId => 2004,
            VehicleError::IdNotFound => 2005,
            VehicleError::NotFound(_) => 2006,
            VehicleError::Store(_) => 2100,
        }
    }

    /// Short kind name used in logs and metrics labels.
    pub fn kind(&self) -> &'static str {
        match self {
            VehicleError::MissingFields => "missing_fields",
            VehicleError::IdConflict => "id_conflict",
            VehicleError::InvalidYear => "invalid_year",
            VehicleError::MissingId => "missing_id",
            VehicleError::IdNotFound => "id_not_found",
            VehicleError::NotFound(_) => "not_found",
            VehicleError::Store(_) => "store",
        }
    }
}

impl From<ModelError> for VehicleError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Conflict(_) => VehicleError::IdConflict,
            other => VehicleError::Store(other.to_string()),
        }
    }
}
