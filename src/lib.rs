//! Minimal e-commerce demo service.
//!
//! A small HTTP API that lists a product catalog and acknowledges orders,
//! plus the storefront landing page served from the same process.
//!
//! # Endpoints
//!
//! ```text
//! GET  /               storefront page (static HTML)
//! GET  /products       product catalog as a JSON array
//! POST /orders         unconditional order acknowledgment (201)
//! GET  /health         liveness check
//! GET  /api/v1/status  service status and counters
//! ```
//!
//! Orders are acknowledged but never recorded; the catalog is immutable
//! for the lifetime of the process.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`catalog`]: Product types and catalog seeding
//! - [`orders`]: Order acknowledgment types
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Prometheus metric helpers
//! - [`utils`]: Utility functions

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod orders;
pub mod utils;

pub use config::Config;
pub use error::{Result, StoreError};
