//! HTTP API handlers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, Product};
use crate::metrics;
use crate::orders::OrderAck;

/// The storefront landing page.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The product catalog, immutable after startup.
    pub catalog: Arc<Catalog>,
    /// Count of orders acknowledged since startup.
    pub orders_acknowledged: Arc<AtomicU64>,
}

impl AppState {
    /// Create app state around a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            orders_acknowledged: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Orders acknowledged since startup.
    pub fn orders_acknowledged(&self) -> u64 {
        self.orders_acknowledged.load(Ordering::SeqCst)
    }

    fn record_order(&self) -> u64 {
        self.orders_acknowledged.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::seed())
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Service status.
    pub status: &'static str,
    /// Number of products in the catalog.
    pub catalog_size: usize,
    /// Orders acknowledged since startup.
    pub orders_acknowledged: u64,
}

/// Storefront page handler - serves the static landing page.
pub async fn index() -> impl IntoResponse {
    metrics::inc_pages_served();
    Html(INDEX_HTML)
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Status handler - returns service status and counters.
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusResponse {
        status: "running",
        catalog_size: state.catalog.len(),
        orders_acknowledged: state.orders_acknowledged(),
    })
}

/// Catalog handler - returns the full product list.
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let start = Instant::now();

    let products = state.catalog.products().to_vec();

    metrics::inc_products_listed();
    metrics::record_request_latency(start, "/products");

    Json(products)
}

/// Order handler - acknowledges every order unconditionally.
///
/// The body is taken as raw bytes and never inspected, so empty and
/// non-JSON bodies are acknowledged the same as well-formed ones.
pub async fn place_order(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let start = Instant::now();

    let total = state.record_order();
    debug!(
        "Acknowledged order #{} ({} body bytes, discarded)",
        total,
        body.len()
    );

    metrics::inc_orders_acknowledged();
    metrics::record_request_latency(start, "/orders");

    (StatusCode::CREATED, Json(OrderAck::placed()))
}
