//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Catalog to cart to checkout against a file-backed store
//! - `persistence` - Reloading carts written by this and older versions
//!
//! Shared fixtures live here.

use std::path::Path;
use std::time::Duration;

use shopfront_cart::{CatalogClient, CatalogConfig, CatalogSource};

/// A small catalog in the shape real feeds use (numeric ids, float prices).
pub const CATALOG_JSON: &str = r#"[
    {"id": 1, "title": "Fjallraven Backpack", "description": "Fits 15 inch laptops", "category": "men's clothing", "price": 109.95, "image": "backpack.jpg"},
    {"id": 2, "title": "Slim Fit T-Shirt", "description": "Casual", "category": "men's clothing", "price": 22.3, "image": "tshirt.jpg"},
    {"id": 5, "title": "Dragon Bracelet", "description": "Silver", "category": "jewelery", "price": 695},
    {"id": 9, "title": "Portable Hard Drive", "description": "2TB", "category": "electronics", "price": 64, "image": ""}
]"#;

/// Write [`CATALOG_JSON`] into `dir` and return a client reading it.
///
/// # Panics
///
/// Panics if the fixture file cannot be written.
#[must_use]
pub fn file_catalog(dir: &Path) -> CatalogClient {
    let path = dir.join("products.json");
    std::fs::write(&path, CATALOG_JSON).expect("write catalog fixture");
    CatalogClient::new(&CatalogConfig {
        source: CatalogSource::File(path),
        cache_ttl: Duration::from_secs(60),
    })
}
