//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod order;
pub mod price;

pub use category::CategoryFilter;
pub use id::{ProductId, ProductIdError};
pub use order::{OrderNumber, OrderNumberError};
pub use price::{CurrencyCode, CurrencyCodeError, Price};
