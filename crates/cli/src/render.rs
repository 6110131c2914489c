//! Terminal rendering.
//!
//! The view layer: prints whatever the cart and catalog hand back. Nothing
//! here touches state.

#![allow(clippy::print_stdout)]

use shopfront_cart::{CartItemView, CartView, OrderSummary, Product};
use shopfront_core::{CurrencyCode, Price, ProductId};

pub fn products(products: &[Product], default_image: &str, currency: CurrencyCode) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }
    for product in products {
        println!(
            "[{}] {}  {}  ({})",
            product.id,
            product.title,
            Price::new(product.price, currency),
            product.category
        );
        if !product.description.is_empty() {
            println!("    {}", product.description);
        }
        println!("    image: {}", product.image_or(default_image));
    }
}

pub fn categories(categories: &[String]) {
    println!("All");
    for category in categories {
        println!("{category}");
    }
}

pub fn catalog_unavailable() {
    println!("Failed to load products. Please try again later.");
}

fn line(item: &CartItemView) -> String {
    format!(
        "[{}] {} ({})  {} x {} = {}",
        item.id, item.title, item.category, item.quantity, item.unit_price, item.line_price
    )
}

pub fn line_added(item: &CartItemView, was_new: bool) {
    if was_new {
        println!("Added {}", line(item));
    } else {
        println!("Updated {}", line(item));
    }
}

pub fn line_updated(item: &CartItemView) {
    println!("{}", line(item));
}

pub fn add_rejected(id: &ProductId) {
    println!("{id} could not be added to your cart.");
}

pub fn quantity_unchanged(id: &ProductId, in_cart: bool) {
    if in_cart {
        println!("Quantity for {id} unchanged (minimum is 1; use `remove` to drop it).");
    } else {
        println!("{id} is not in your cart.");
    }
}

pub fn removed(id: &ProductId, was_present: bool) {
    if was_present {
        println!("Removed {id}.");
    } else {
        println!("{id} is not in your cart.");
    }
}

pub fn badge(count: usize) {
    println!("Cart items: {count}");
}

pub fn totals(view: &CartView) {
    println!("Subtotal: {}", view.subtotal);
    println!("Shipping: {}", view.shipping);
    println!("Total:    {}", view.total);
}

pub fn cart_empty() {
    println!("Your cart is empty");
}

pub fn cart(view: &CartView) {
    if view.is_empty() {
        cart_empty();
        return;
    }
    for item in &view.items {
        println!("{}", line(item));
    }
    println!();
    badge(view.item_count);
    println!("Units: {}", view.total_quantity);
    totals(view);
}

pub fn checkout_empty() {
    println!("Your cart is empty!");
}

pub fn order(summary: &OrderSummary) {
    println!("Order {}", summary.order_number);
    println!("Items: {}", summary.items);
    if let Some(subtotal) = &summary.subtotal {
        println!("Subtotal: {subtotal}");
    }
    println!("Total: {}", summary.total);
    if let Some(placed_at) = summary.placed_at {
        println!("Placed: {}", placed_at.to_rfc3339());
    }
}

pub fn no_orders() {
    println!("No orders yet.");
}
