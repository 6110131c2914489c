//! Checkout: record an order summary, then clear the cart.

use chrono::Utc;
use rand::Rng;
use shopfront_core::{OrderNumber, Price};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::PricingConfig;
use crate::models::OrderSummary;
use crate::storage::{LAST_ORDER_SLOT, SlotStore, StorageError};
use crate::store::CartStore;

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing to check out.
    #[error("Cart is empty")]
    EmptyCart,

    /// The order summary could not be recorded. The cart is left untouched.
    #[error("Failed to record order: {0}")]
    Storage(#[from] StorageError),
}

/// Check out the cart.
///
/// Writes an [`OrderSummary`] to the `lastOrder` slot and only then clears
/// the cart. If the summary cannot be written the cart keeps its items.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if the cart has no items, or
/// [`CheckoutError::Storage`] if the summary could not be written.
pub fn checkout<S, R>(
    cart: &mut CartStore<S>,
    pricing: &PricingConfig,
    rng: &mut R,
) -> Result<OrderSummary, CheckoutError>
where
    S: SlotStore,
    R: Rng,
{
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let totals = cart.compute_totals(pricing.shipping_cost);
    let summary = OrderSummary {
        order_number: OrderNumber::generate(rng),
        items: cart.count(),
        total: Price::new(totals.total, pricing.currency).to_string(),
        subtotal: Some(Price::new(totals.subtotal, pricing.currency).to_string()),
        placed_at: Some(Utc::now()),
    };

    let json = serde_json::to_string(&summary).map_err(StorageError::from)?;
    cart.storage_mut().write(LAST_ORDER_SLOT, &json)?;

    cart.clear();

    info!(
        order_number = %summary.order_number,
        items = summary.items,
        total = %summary.total,
        "Checkout complete"
    );
    Ok(summary)
}

/// The most recent order summary, if one was recorded and still parses.
pub fn last_order<S: SlotStore>(storage: &S) -> Option<OrderSummary> {
    let raw = match storage.read(LAST_ORDER_SLOT) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(error = %e, "Failed to read last order");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(summary) => Some(summary),
        Err(e) => {
            warn!(error = %e, "Last order record is corrupt");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal::Decimal;
    use shopfront_core::ProductId;

    use super::*;
    use crate::models::NewLineItem;
    use crate::storage::{CART_SLOT, MemoryStore};

    fn product(id: &str, unit_price: i64) -> NewLineItem {
        NewLineItem {
            id: ProductId::parse(id).unwrap(),
            title: id.to_uppercase(),
            category: "misc".to_string(),
            image: String::new(),
            unit_price: Decimal::from(unit_price),
        }
    }

    /// Accepts cart writes but refuses the order slot.
    #[derive(Default)]
    struct NoOrderSlot(MemoryStore);

    impl SlotStore for NoOrderSlot {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == LAST_ORDER_SLOT {
                return Err(StorageError::Unavailable("quota exceeded".to_string()));
            }
            self.0.write(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_checkout_clears_and_records() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add(product("p1", 10));
        cart.add(product("p1", 10));
        cart.add(product("p2", 5));

        let mut rng = StdRng::seed_from_u64(3);
        let summary = checkout(&mut cart, &PricingConfig::default(), &mut rng).unwrap();

        assert_eq!(summary.items, 2);
        assert_eq!(summary.total, "$45.00");
        assert_eq!(summary.subtotal.as_deref(), Some("$25.00"));
        assert!(cart.is_empty());
        assert_eq!(
            cart.storage().read(CART_SLOT).unwrap().as_deref(),
            Some("[]")
        );
        assert_eq!(last_order(cart.storage()), Some(summary));
    }

    #[test]
    fn test_empty_cart_writes_nothing() {
        let mut cart = CartStore::load(MemoryStore::new());
        let result = checkout(&mut cart, &PricingConfig::default(), &mut StdRng::seed_from_u64(0));

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
        assert!(cart.storage().is_empty());
        assert!(last_order(cart.storage()).is_none());
    }

    #[test]
    fn test_failed_record_keeps_cart() {
        let mut cart = CartStore::load(NoOrderSlot::default());
        cart.add(product("p1", 10));

        let result = checkout(&mut cart, &PricingConfig::default(), &mut StdRng::seed_from_u64(0));

        assert!(matches!(result, Err(CheckoutError::Storage(_))));
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_order_number_format() {
        let mut cart = CartStore::load(MemoryStore::new());
        cart.add(product("p1", 1));
        let summary = checkout(&mut cart, &PricingConfig::default(), &mut rand::rng()).unwrap();

        let number = summary.order_number.as_str();
        assert_eq!(number.len(), 10);
        assert!(number.starts_with('#'));
        assert!(
            number[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_corrupt_last_order_is_none() {
        let storage = MemoryStore::new().with_slot(LAST_ORDER_SLOT, "oops");
        assert!(last_order(&storage).is_none());
    }
}
