//! Unified error types for the storefront service.

use thiserror::Error;

/// Unified error type for the storefront service.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Catalog seeding error.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Catalog seeding and integrity errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the seed file.
    #[error("failed to read catalog file {path}: {reason}")]
    ReadFailed {
        /// The path that failed.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Seed file contents are not a valid product array.
    #[error("failed to parse catalog file {path}: {source}")]
    ParseFailed {
        /// The path that failed.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Seed file contained no products.
    #[error("catalog file {path} contains no products")]
    Empty {
        /// The offending path.
        path: String,
    },

    /// Two products share an id.
    #[error("duplicate product id {id} in catalog")]
    DuplicateId {
        /// The duplicated id.
        id: u64,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, StoreError>;
