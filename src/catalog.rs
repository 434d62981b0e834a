//! Product types and catalog seeding.
//!
//! The catalog is immutable after startup. It is seeded either from the
//! built-in default (a single demo product) or from a JSON file named by
//! `CATALOG_PATH`, which must contain a non-empty array of products with
//! unique ids.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CatalogError, Result};

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Price in whole currency units.
    pub price: u64,
}

impl Product {
    /// Create a new product.
    pub fn new(id: u64, name: impl Into<String>, price: u64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Immutable product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The built-in catalog: one demo product.
    pub fn seed() -> Self {
        Self {
            products: vec![Product::new(1, "Laptop", 1200)],
        }
    }

    /// Build a catalog from a list of products, checking integrity.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId { id: product.id }.into());
            }
        }
        Ok(Self { products })
    }

    /// Load a catalog from a JSON seed file (array of products).
    pub fn from_json_file(path: &str) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let products: Vec<Product> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::ParseFailed {
                path: path.to_string(),
                source,
            })?;

        if products.is_empty() {
            return Err(CatalogError::Empty {
                path: path.to_string(),
            }
            .into());
        }

        let catalog = Self::from_products(products)?;
        info!("Loaded {} products from {}", catalog.len(), path);
        Ok(catalog)
    }

    /// Load from the configured seed path, or the built-in catalog.
    pub fn from_config(catalog_path: Option<&str>) -> Result<Self> {
        match catalog_path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::seed()),
        }
    }

    /// All products, in seed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}
