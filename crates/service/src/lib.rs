//! Service layer for the vehicle catalog.
//! - Validates and normalizes incoming vehicle data before it reaches storage.
//! - Composes filtered listings over a narrow store abstraction.
//! - Translates storage outcomes into typed, user-facing failures.

pub mod vehicle;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
