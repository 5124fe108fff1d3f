use serde::{Deserialize, Serialize};

/// A persisted catalog entry. Equality covers all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
}

/// Request body shared by create and update; every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInput {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl VehicleInput {
    /// Trim text fields; a blank value counts as absent.
    pub fn normalized(self) -> Self {
        Self { make: clean(self.make), model: clean(self.model), ..self }
    }

    /// The full vehicle, when every field is present.
    pub fn complete(&self) -> Option<Vehicle> {
        Some(Vehicle {
            id: self.id?,
            year: self.year?,
            make: self.make.clone()?,
            model: self.model.clone()?,
        })
    }
}

/// Listing criteria; present criteria are OR-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl ListFilter {
    pub fn normalized(self) -> Self {
        Self { year: self.year, make: clean(self.make), model: clean(self.model) }
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.make.is_none() && self.model.is_none()
    }
}

fn clean(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
