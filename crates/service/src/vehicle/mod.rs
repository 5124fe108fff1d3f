//! Vehicle module: domain, validation rules, listing composition, storage
//! abstraction and the service tying them together.

pub mod domain;
pub mod errors;
pub mod rules;
pub mod query;
pub mod repository;
pub mod repo;
pub mod service;

pub use configs::UpdateMode;
pub use domain::{ListFilter, Vehicle, VehicleInput};
pub use errors::VehicleError;
pub use repository::VehicleStore;
pub use service::VehicleService;
