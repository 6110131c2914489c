//! Catalog products.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopfront_core::ProductId;

use super::NewLineItem;

/// A product as listed in the catalog feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// The product image, or `default_image` when the feed has none.
    #[must_use]
    pub fn image_or<'a>(&'a self, default_image: &'a str) -> &'a str {
        match self.image.as_deref() {
            Some(image) if !image.trim().is_empty() => image,
            _ => default_image,
        }
    }

    /// Cart payload for adding this product.
    #[must_use]
    pub fn to_new_line_item(&self, default_image: &str) -> NewLineItem {
        NewLineItem {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category.clone(),
            image: self.image_or(default_image).to_string(),
            unit_price: self.price,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const DEFAULT_IMAGE: &str = "./imgs/not-found.jpg";

    #[test]
    fn test_deserialize_catalog_record() {
        let product: Product = serde_json::from_str(
            r#"{"id":1,"title":"Backpack","description":"Fits a laptop","category":"bags","price":109.95,"image":"bag.jpg"}"#,
        )
        .unwrap();
        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.price, Decimal::new(10995, 2));
    }

    #[test]
    fn test_missing_image_falls_back() {
        let product: Product = serde_json::from_str(
            r#"{"id":"p2","title":"Ring","category":"jewelery","price":5}"#,
        )
        .unwrap();
        assert_eq!(product.image_or(DEFAULT_IMAGE), DEFAULT_IMAGE);
    }

    #[test]
    fn test_blank_image_falls_back() {
        let product: Product = serde_json::from_str(
            r#"{"id":"p2","title":"Ring","category":"jewelery","price":5,"image":" "}"#,
        )
        .unwrap();
        let item = product.to_new_line_item(DEFAULT_IMAGE);
        assert_eq!(item.image, DEFAULT_IMAGE);
        assert_eq!(item.unit_price, Decimal::from(5));
    }
}
