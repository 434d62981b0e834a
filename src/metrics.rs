//! Prometheus metrics for request counting and latency tracking.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Catalog listings counter metric name.
pub const METRIC_PRODUCTS_LISTED: &str = "products_listed_total";
/// Orders acknowledged counter metric name.
pub const METRIC_ORDERS_ACKNOWLEDGED: &str = "orders_acknowledged_total";
/// Storefront page serves counter metric name.
pub const METRIC_PAGES_SERVED: &str = "pages_served_total";
/// Request handling latency metric name.
pub const METRIC_REQUEST_LATENCY: &str = "request_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_PRODUCTS_LISTED,
        "Total number of catalog listing requests served"
    );
    describe_counter!(
        METRIC_ORDERS_ACKNOWLEDGED,
        "Total number of orders acknowledged"
    );
    describe_counter!(
        METRIC_PAGES_SERVED,
        "Total number of storefront page requests served"
    );
    describe_histogram!(
        METRIC_REQUEST_LATENCY,
        "Request handling latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Record request handling latency for an endpoint.
pub fn record_request_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
}

/// Increment the catalog listings counter.
pub fn inc_products_listed() {
    counter!(METRIC_PRODUCTS_LISTED).increment(1);
}

/// Increment the orders acknowledged counter.
pub fn inc_orders_acknowledged() {
    counter!(METRIC_ORDERS_ACKNOWLEDGED).increment(1);
}

/// Increment the storefront page counter.
pub fn inc_pages_served() {
    counter!(METRIC_PAGES_SERVED).increment(1);
}
