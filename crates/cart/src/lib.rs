//! Shopfront Cart - cart state management library.
//!
//! # Architecture
//!
//! - [`CartStore`] owns the ordered list of line items and mirrors it to a
//!   persisted slot after every mutation
//! - [`storage`] abstracts the persisted key-value slots (`cart`, `lastOrder`)
//! - [`catalog`] fetches the product list over HTTP or from a local file
//! - [`checkout`] records an order summary and clears the cart
//! - [`view`] turns store state into display strings for a render layer
//!
//! Everything except the catalog fetch is synchronous. A `CartStore` is an
//! owned value handed to event handlers by `&mut`; there is no global state.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use shopfront_cart::{CartStore, MemoryStore, NewLineItem};
//! use shopfront_core::ProductId;
//!
//! let mut cart = CartStore::load(MemoryStore::new());
//! let item = NewLineItem {
//!     id: ProductId::parse("p1").unwrap(),
//!     title: "Mug".to_string(),
//!     category: "kitchen".to_string(),
//!     image: "mug.jpg".to_string(),
//!     unit_price: Decimal::from(10),
//! };
//!
//! cart.add(item.clone());
//! let added = cart.add(item).unwrap();
//! assert!(!added.was_new);
//! assert_eq!(added.item.quantity(), 2);
//!
//! let totals = cart.compute_totals(Decimal::from(20));
//! assert_eq!(totals.subtotal, Decimal::from(20));
//! assert_eq!(totals.total, Decimal::from(40));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;
pub mod view;

pub use catalog::{CatalogClient, CatalogError, CatalogSource};
pub use checkout::{CheckoutError, checkout, last_order};
pub use config::{CatalogConfig, ConfigError, PricingConfig, ShopConfig};
pub use error::{Error, Result};
pub use models::{LineItem, NewLineItem, OrderSummary, Product};
pub use storage::{FileStore, MemoryStore, SlotStore, StorageError};
pub use store::{Added, CartStore, Totals};
pub use view::{CartItemView, CartView};
