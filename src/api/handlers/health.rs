//! Health check handlers.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::api::state::AppState;

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<Value> {
    Json(json!({
        "code": 0,
        "message": "success",
        "data": {
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// Readiness probe.
///
/// The service keeps no external dependencies, so it is ready once it serves
/// requests; the session count is reported for visibility.
pub async fn ready(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "code": 0,
        "message": "success",
        "data": {
            "ready": true,
            "components": {
                "sessions": state.session_service.active()
            }
        }
    }))
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<AppState>) -> String {
    let mut output = String::new();

    output.push_str("# HELP vpagen_up Whether the service is up\n");
    output.push_str("# TYPE vpagen_up gauge\n");
    output.push_str("vpagen_up 1\n");

    if let Some(handle) = &state.metrics {
        output.push_str(&handle.render());
    }

    output
}
