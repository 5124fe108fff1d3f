use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Deserializer};
use service::vehicle::{ListFilter, Vehicle, VehicleInput};
use tracing::info;

use crate::{errors::JsonApiError, observability, routes::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
}

// `?year=` means no year criterion
fn blank_as_none<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i32>, D::Error> {
    let raw = Option::<String>::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl From<ListQuery> for ListFilter {
    fn from(q: ListQuery) -> Self {
        ListFilter { year: q.year, make: q.make, model: q.model }
    }
}

#[utoipa::path(
    get, path = "/vehicles", tag = "vehicles",
    params(ListQuery),
    responses(
        (status = 200, description = "Vehicles matching any given criterion, or all vehicles"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Vehicle>>, JsonApiError> {
    let Query(q) = query?;
    let res = state.vehicles.list(q.into()).await;
    observability::record("list", &res);
    Ok(Json(res?))
}

#[utoipa::path(
    get, path = "/vehicles/{id}", tag = "vehicles",
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, id: Result<Path<i32>, PathRejection>) -> Result<Json<Vehicle>, JsonApiError> {
    let Path(id) = id?;
    let res = state.vehicles.get(id).await;
    observability::record("get", &res);
    Ok(Json(res?))
}

#[utoipa::path(
    post, path = "/vehicles", tag = "vehicles",
    request_body = crate::openapi::VehicleInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Missing fields or invalid year"),
        (status = 409, description = "ID of Vehicle Already Exists")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<VehicleInput>, JsonRejection>,
) -> Result<Json<Vehicle>, JsonApiError> {
    let Json(input) = body?;
    info!(id = ?input.id, year = ?input.year, make = ?input.make, model = ?input.model, "vehicle_create_request");
    let res = state.vehicles.create(input).await;
    observability::record("create", &res);
    Ok(Json(res?))
}

#[utoipa::path(
    put, path = "/vehicles", tag = "vehicles",
    request_body = crate::openapi::VehicleInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Missing id or invalid year"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    body: Result<Json<VehicleInput>, JsonRejection>,
) -> Result<Json<Vehicle>, JsonApiError> {
    let Json(input) = body?;
    let res = state.vehicles.update(input).await;
    observability::record("update", &res);
    Ok(Json(res?))
}

#[utoipa::path(
    delete, path = "/vehicles/{id}", tag = "vehicles",
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, id: Result<Path<i32>, PathRejection>) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    let res = state.vehicles.delete(id).await;
    observability::record("delete", &res);
    res?;
    Ok(StatusCode::OK)
}
