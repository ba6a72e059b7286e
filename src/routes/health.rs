use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Reports 503 while the contact relay credentials are missing; pages are
/// still served, but the form renders disabled.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    if state.config.relay.is_complete() {
        (StatusCode::OK, Json(json!({"status": "ready"})))
    } else {
        tracing::warn!("Readiness check failed: contact relay not configured");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": "relay_not_configured"
            })),
        )
    }
}
