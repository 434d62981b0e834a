//! HTTP API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health, index, list_products, place_order, status, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Storefront page
        .route("/", get(index))
        // Store endpoints
        .route("/products", get(list_products))
        .route("/orders", post(place_order))
        // Health endpoint
        .route("/health", get(health))
        // Status endpoint
        .route("/api/v1/status", get(status))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
