use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

use service::vehicle::VehicleError;

// Prometheus metrics (default registry)
pub static VEHICLE_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "vehicle_catalog_operations_total",
        "Vehicle operations handled, by operation and outcome",
        &["op", "outcome"]
    )
    .expect("register vehicle_catalog_operations_total")
});

/// Count one operation; the outcome is `ok` or the failure kind.
pub fn record<T>(op: &str, res: &Result<T, VehicleError>) {
    let outcome = match res {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    VEHICLE_OPERATIONS_TOTAL.with_label_values(&[op, outcome]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_are_counted_by_kind() {
        let before = VEHICLE_OPERATIONS_TOTAL.with_label_values(&["test_op", "invalid_year"]).get();
        record::<()>("test_op", &Err(VehicleError::InvalidYear));
        record("test_op", &Ok(()));
        let after = VEHICLE_OPERATIONS_TOTAL.with_label_values(&["test_op", "invalid_year"]).get();
        assert_eq!(after, before + 1);

        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("vehicle_catalog_operations_total"));
    }
}
