use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct VehicleDoc {
    pub id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
}

/// Create needs every field; update needs `id` plus the fields to change.
#[derive(ToSchema)]
pub struct VehicleInputDoc {
    pub id: Option<i32>,
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    pub error: String,
    pub message: Option<String>,
    pub code: Option<u16>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::vehicles::list,
        crate::routes::vehicles::get,
        crate::routes::vehicles::create,
        crate::routes::vehicles::update,
        crate::routes::vehicles::delete,
    ),
    components(
        schemas(
            HealthResponse,
            VehicleDoc,
            VehicleInputDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "vehicles")
    )
)]
pub struct ApiDoc;
