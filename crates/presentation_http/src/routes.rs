//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::{handlers, middleware::track_requests, openapi, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let json_limit = state.config.server.max_body_size_json_bytes;
    let image_limit = state.config.server.max_body_size_image_bytes;
    let metrics = state.metrics.clone();

    Router::new()
        .route("/", get(handlers::home::home))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Metrics endpoints
        .route("/metrics", get(handlers::metrics::get_metrics))
        .route("/metrics/prometheus", get(handlers::metrics::get_metrics_prometheus))
        // Recommenders
        .route(
            "/crop-recommendation",
            post(handlers::crop::recommend_crop).layer(DefaultBodyLimit::max(json_limit)),
        )
        .route(
            "/fertilizer-recommendation",
            post(handlers::fertilizer::recommend_fertilizer)
                .layer(DefaultBodyLimit::max(json_limit)),
        )
        // Image classifier
        .route(
            "/medicinal-plant-prediction",
            post(handlers::plant::predict_plant).layer(DefaultBodyLimit::max(image_limit)),
        )
        .merge(openapi::create_openapi_routes())
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(metrics, track_requests))
        // Attach state
        .with_state(state)
}

/// CORS policy from the server configuration
///
/// An empty origin list allows any origin.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if config.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();
    layer.allow_origin(origins)
}
