//! Cart, catalog and order data models.

mod line_item;
mod order;
mod product;

pub use line_item::{LineItem, NewLineItem};
pub use order::OrderSummary;
pub use product::Product;

pub(crate) use line_item::StoredLineItem;
