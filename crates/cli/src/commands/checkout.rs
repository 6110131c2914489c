//! Checkout commands.

use shopfront_cart::{CheckoutError, OrderSummary, Result, last_order as read_last_order};

use super::Shop;
use crate::render;

/// Place the order.
///
/// An empty cart is reported to the user, not treated as a failure, and
/// yields `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the order summary could not be recorded.
pub fn checkout(shop: &mut Shop) -> Result<Option<OrderSummary>> {
    match shopfront_cart::checkout(&mut shop.cart, &shop.config.pricing, &mut rand::rng()) {
        Ok(summary) => {
            render::order(&summary);
            Ok(Some(summary))
        }
        Err(CheckoutError::EmptyCart) => {
            render::checkout_empty();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Show the most recent order summary.
pub fn last_order(shop: &Shop) {
    match read_last_order(shop.cart.storage()) {
        Some(summary) => render::order(&summary),
        None => render::no_orders(),
    }
}
