//! Catalog browsing commands.
//!
//! A catalog that fails to load is not fatal: the listing shows an
//! empty-state message instead.

use shopfront_core::CategoryFilter;
use tracing::warn;

use super::Shop;
use crate::render;

/// What a listing command printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// This many entries were listed.
    Shown(usize),
    /// The catalog failed to load and the empty-state message was printed.
    Unavailable,
}

/// List products, optionally filtered by category.
pub async fn products(shop: &Shop, category: Option<&str>) -> Listing {
    let filter = CategoryFilter::from(category);
    match shop.catalog.products(&filter).await {
        Ok(products) => {
            render::products(&products, &shop.config.default_image, shop.config.pricing.currency);
            Listing::Shown(products.len())
        }
        Err(e) => {
            warn!(error = %e, source = %shop.catalog.source(), "Failed to load products");
            render::catalog_unavailable();
            Listing::Unavailable
        }
    }
}

/// List categories, led by the `All` pseudo-category.
pub async fn categories(shop: &Shop) -> Listing {
    match shop.catalog.categories().await {
        Ok(categories) => {
            render::categories(&categories);
            Listing::Shown(categories.len())
        }
        Err(e) => {
            warn!(error = %e, "Failed to load categories");
            render::catalog_unavailable();
            Listing::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{shop_with_catalog, shop_without_catalog};

    #[tokio::test]
    async fn test_products_filtered() {
        let (_dir, shop) = shop_with_catalog();
        assert_eq!(products(&shop, None).await, Listing::Shown(3));
        assert_eq!(products(&shop, Some("bags")).await, Listing::Shown(2));
        assert_eq!(products(&shop, Some("ALL")).await, Listing::Shown(3));
    }

    #[tokio::test]
    async fn test_categories_listed() {
        let (_dir, shop) = shop_with_catalog();
        assert_eq!(categories(&shop).await, Listing::Shown(2));
    }

    #[tokio::test]
    async fn test_unavailable_catalog_is_not_fatal() {
        let (_dir, shop) = shop_without_catalog();
        assert_eq!(products(&shop, None).await, Listing::Unavailable);
        assert_eq!(categories(&shop).await, Listing::Unavailable);
    }
}
