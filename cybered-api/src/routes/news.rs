//! News endpoint backed by the upstream news-search API

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tracing::error;

use crate::AppState;

/// Create news routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/news", get(get_news))
}

/// GET /api/news - Latest cybersecurity news, filtered and normalized
///
/// Always answers well-formed JSON with an `articles` field. Upstream
/// failures are logged server-side and collapsed into one generic error
/// body so upstream status codes and messages never leak to the caller.
async fn get_news(State(state): State<AppState>) -> impl IntoResponse {
    let client = match &state.news_client {
        Some(client) => client,
        None => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "News API key not configured",
                    "articles": []
                })),
            )
                .into_response();
        }
    };

    match client.fetch_news().await {
        Ok(feed) => (StatusCode::OK, Json(feed)).into_response(),
        Err(e) => {
            error!("Failed to fetch news from upstream: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Failed to fetch news from API",
                    "articles": []
                })),
            )
                .into_response()
        }
    }
}
