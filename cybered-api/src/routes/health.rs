//! Health check endpoint

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
}

/// Simple liveness check (always returns OK if the server is running)
async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}

/// Create health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
