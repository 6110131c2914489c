//! Cart mutation and display commands.

use shopfront_cart::{CartItemView, CartView, Result};
use shopfront_core::ProductId;
use tracing::debug;

use super::Shop;
use crate::render;

/// Add one unit of a catalog product.
///
/// # Errors
///
/// Returns an error if the id is malformed, the catalog cannot be loaded, or
/// the product does not exist.
pub async fn add(shop: &mut Shop, id: &str) -> Result<()> {
    let id = ProductId::parse(id)?;
    let product = shop.catalog.find(&id).await?;

    match shop
        .cart
        .add(product.to_new_line_item(&shop.config.default_image))
    {
        Some(added) => {
            let view = CartItemView::new(added.item, &shop.config.pricing);
            render::line_added(&view, added.was_new);
        }
        None => render::add_rejected(&id),
    }
    render::badge(shop.cart.count());
    Ok(())
}

/// Adjust an item's quantity by `delta`.
///
/// # Errors
///
/// Returns an error if the id is malformed.
pub fn change_quantity(shop: &mut Shop, id: &str, delta: i32) -> Result<()> {
    let id = ProductId::parse(id)?;
    match shop.cart.change_quantity(&id, delta) {
        Some(item) => {
            let view = CartItemView::new(item, &shop.config.pricing);
            render::line_updated(&view);
        }
        None => {
            debug!(product_id = %id, delta, "Quantity unchanged");
            render::quantity_unchanged(&id, shop.cart.get(&id).is_some());
        }
    }
    render::totals(&CartView::new(&shop.cart, &shop.config.pricing));
    Ok(())
}

/// Remove an item.
///
/// # Errors
///
/// Returns an error if the id is malformed.
pub fn remove(shop: &mut Shop, id: &str) -> Result<()> {
    let id = ProductId::parse(id)?;
    let removed = shop.cart.remove(&id);
    render::removed(&id, removed.is_some());

    let view = CartView::new(&shop.cart, &shop.config.pricing);
    render::badge(view.item_count);
    if view.is_empty() {
        render::cart_empty();
    } else {
        render::totals(&view);
    }
    Ok(())
}

/// Print the whole cart.
pub fn show(shop: &Shop) {
    render::cart(&CartView::new(&shop.cart, &shop.config.pricing));
}

/// Empty the cart.
pub fn clear(shop: &mut Shop) {
    shop.cart.clear();
    render::badge(0);
    render::cart_empty();
}
