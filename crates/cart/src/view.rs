//! Display data for a render layer.
//!
//! The store hands back values; these types turn them into the strings a
//! cart panel shows, so formatting lives in one place.

use shopfront_core::Price;

use crate::config::PricingConfig;
use crate::models::LineItem;
use crate::storage::SlotStore;
use crate::store::CartStore;

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
}

impl CartItemView {
    /// Display data for one line item.
    #[must_use]
    pub fn new(item: &LineItem, pricing: &PricingConfig) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title.clone(),
            category: item.category.clone(),
            image: item.image.clone(),
            quantity: item.quantity(),
            unit_price: Price::new(item.unit_price(), pricing.currency).to_string(),
            line_price: Price::new(item.price(), pricing.currency).to_string(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    /// Badge count: number of line items.
    pub item_count: usize,
    /// Units across all line items.
    pub total_quantity: u64,
}

impl CartView {
    /// Build the view for the current cart.
    #[must_use]
    pub fn new<S: SlotStore>(cart: &CartStore<S>, pricing: &PricingConfig) -> Self {
        let totals = cart.compute_totals(pricing.shipping_cost);
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView::new(item, pricing))
                .collect(),
            subtotal: Price::new(totals.subtotal, pricing.currency).to_string(),
            shipping: Price::new(totals.shipping, pricing.currency).to_string(),
            total: Price::new(totals.total, pricing.currency).to_string(),
            item_count: cart.count(),
            total_quantity: cart.total_quantity(),
        }
    }

    /// Whether to show the empty-cart state instead of the item list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
