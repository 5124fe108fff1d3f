use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::vehicle::VehicleError;
use tracing::error;

/// JSON error body: `{"error": <title>, "message": <reason>, "code": <n>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
    pub code: Option<u16>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message, code: None }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = ?self.message, "request failed");
        }
        let body = serde_json::json!({"error": self.error, "message": self.message, "code": self.code});
        (self.status, Json(body)).into_response()
    }
}

/// Status each vehicle failure is reported with.
pub fn status_for(e: &VehicleError) -> StatusCode {
    match e {
        VehicleError::MissingFields | VehicleError::InvalidYear | VehicleError::MissingId => StatusCode::BAD_REQUEST,
        VehicleError::IdConflict => StatusCode::CONFLICT,
        VehicleError::IdNotFound | VehicleError::NotFound(_) => StatusCode::NOT_FOUND,
        VehicleError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<VehicleError> for JsonApiError {
    fn from(e: VehicleError) -> Self {
        let status = status_for(&e);
        let title = match status {
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::CONFLICT => "Conflict",
            StatusCode::NOT_FOUND => "Not Found",
            _ => "Internal Error",
        };
        Self { status, error: title, message: Some(e.to_string()), code: Some(e.code()) }
    }
}

/// Request that never reached the service: bad JSON, query or path.
fn malformed(status: StatusCode, body: String) -> JsonApiError {
    let title = status.canonical_reason().unwrap_or("Bad Request");
    JsonApiError::new(status, title, Some(body))
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self { malformed(r.status(), r.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self { malformed(r.status(), r.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self { malformed(r.status(), r.body_text()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_its_status() {
        let cases = [
            (VehicleError::MissingFields, StatusCode::BAD_REQUEST),
            (VehicleError::InvalidYear, StatusCode::BAD_REQUEST),
            (VehicleError::MissingId, StatusCode::BAD_REQUEST),
            (VehicleError::IdConflict, StatusCode::CONFLICT),
            (VehicleError::IdNotFound, StatusCode::NOT_FOUND),
            (VehicleError::not_found_get(), StatusCode::NOT_FOUND),
            (VehicleError::Store("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (e, status) in cases {
            let api: JsonApiError = e.clone().into();
            assert_eq!(api.status, status, "{e:?}");
            assert_eq!(api.message.as_deref(), Some(e.to_string().as_str()));
            assert_eq!(api.code, Some(e.code()));
        }
    }

    #[test]
    fn into_response_keeps_status() {
        let res = JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", None).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
