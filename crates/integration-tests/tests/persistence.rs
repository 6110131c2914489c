//! Reloading persisted carts, including records written by older front ends.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use shopfront_cart::storage::CART_SLOT;
use shopfront_cart::{CartStore, FileStore, MemoryStore, SlotStore};
use shopfront_core::ProductId;

fn id(s: &str) -> ProductId {
    ProductId::parse(s).unwrap()
}

#[test]
fn test_legacy_string_prices_without_unit_price() {
    // Older carts stored `price` as a one-decimal string and could lack unitPrice
    let legacy = r#"[
        {"id":"3","title":"Jacket","price":"55.9","category":"men's clothing","image":"j.jpg","quantity":1,"unitPrice":"55.9"},
        {"id":"7","title":"Ring","price":30,"category":"jewelery","image":"r.jpg","quantity":3}
    ]"#;
    let cart = CartStore::load(MemoryStore::new().with_slot(CART_SLOT, legacy));

    assert_eq!(cart.count(), 2);
    let ring = cart.get(&id("7")).unwrap();
    assert_eq!(ring.unit_price(), Decimal::from(10));
    assert_eq!(ring.price(), Decimal::from(30));

    let totals = cart.compute_totals(Decimal::from(20));
    assert_eq!(totals.subtotal, Decimal::new(859, 1));
    assert_eq!(totals.total, Decimal::new(1059, 1));
}

#[test]
fn test_corrupt_file_starts_empty_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "not json at all").unwrap();

    let mut cart = CartStore::load(FileStore::new(dir.path()));
    assert!(cart.is_empty());

    cart.add(shopfront_cart::NewLineItem {
        id: id("p1"),
        title: "Mug".to_string(),
        category: "kitchen".to_string(),
        image: String::new(),
        unit_price: Decimal::from(10),
    });

    let reloaded = CartStore::load(FileStore::new(dir.path()));
    assert_eq!(reloaded.count(), 1);
}

#[test]
fn test_remove_persists_only_when_something_was_removed() {
    let mut store = MemoryStore::new();
    store.write(CART_SLOT, r#"[{"id":"p1","unitPrice":1,"quantity":1}]"#).unwrap();

    let mut cart = CartStore::load(store);
    assert!(cart.remove(&id("missing")).is_none());
    // Untouched: still the original text, not a re-serialization
    assert_eq!(
        cart.storage().read(CART_SLOT).unwrap().as_deref(),
        Some(r#"[{"id":"p1","unitPrice":1,"quantity":1}]"#)
    );

    assert!(cart.remove(&id("p1")).is_some());
    assert_eq!(cart.storage().read(CART_SLOT).unwrap().as_deref(), Some("[]"));
}
