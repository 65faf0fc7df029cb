//! HTTP API server

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(handlers::upload))
        .route("/health-check", get(handlers::health_check))
        .with_state(state)
}

/// Cross-origin policy: one allowed origin, GET/POST/OPTIONS only.
///
/// Responses to other origins carry no `access-control-allow-origin` header.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
}

/// Router with body limit, CORS and request tracing applied
pub fn create_app(state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = config.cors.origin_header()?;

    Ok(create_router(state)
        .layer(DefaultBodyLimit::max(config.server.max_upload_bytes))
        .layer(cors_layer(origin))
        .layer(TraceLayer::new_for_http()))
}
