//! API route definitions

mod health;
mod news;

use axum::{http::StatusCode, Json, Router};

use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(news::routes())
        .merge(health::routes())
        .method_not_allowed_fallback(method_not_allowed)
}

/// Known path, unsupported verb. The front end only ever issues GET (plus
/// browser preflights, which the CORS layer answers before routing).
async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
}
