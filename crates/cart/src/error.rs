//! Crate-level error type.
//!
//! Each concern has its own error enum; [`Error`] unifies them for callers
//! that drive several concerns at once.

use shopfront_core::ProductIdError;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Slot storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A product id supplied by the user is malformed.
    #[error("Invalid product id: {0}")]
    InvalidProductId(#[from] ProductIdError),
}

/// Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::from(CatalogError::NotFound("Product not found: p9".to_string()));
        assert_eq!(err.to_string(), "Catalog error: Not found: Product not found: p9");

        let err = Error::from(CheckoutError::EmptyCart);
        assert_eq!(err.to_string(), "Checkout error: Cart is empty");

        let err = Error::from(shopfront_core::ProductId::parse("").unwrap_err());
        assert_eq!(err.to_string(), "Invalid product id: product id cannot be empty");
    }
}
