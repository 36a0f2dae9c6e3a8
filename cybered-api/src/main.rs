//! Cyber Ed Website API Server
//!
//! Small HTTP API backing the Group 7 Cyber Ed website. Its main job is
//! proxying the upstream news-search API so the front end never handles
//! upstream quirks (redacted entries, missing images) or the API key.

mod routes;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use cybered_news::NewsApiClient;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream news client; `None` when NEWS_API_KEY is not configured
    pub news_client: Option<Arc<NewsApiClient>>,
}

/// Build the application router: API routes under `/api`, permissive CORS
/// for the static front end.
fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // The CORS layer only emits the allow-methods/allow-headers pair on
    // preflight responses; the front end expects the full header set on
    // plain responses too. `if_not_present` keeps the preflight values
    // from the CORS layer untouched.
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cybered_api=debug")),
        )
        .init();

    info!("Starting Cyber Ed API server");

    // Initialize the news client from configuration, once, at startup.
    // A missing key is a handled condition: the endpoint stays up and
    // reports the configuration error instead of crashing.
    let news_client = match std::env::var("NEWS_API_KEY") {
        Ok(key) if !key.is_empty() => {
            info!("News API key found in environment");
            Some(Arc::new(NewsApiClient::new(key)))
        }
        _ => {
            info!("NEWS_API_KEY not set - /api/news will report a configuration error");
            None
        }
    };

    let state = AppState { news_client };
    let app = router(state);

    // Start server
    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
