//! Cart line items.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use shopfront_core::ProductId;

/// Decimal places kept on a unit price.
pub const UNIT_PRICE_SCALE: u32 = 4;

/// Unit prices carry at most this many significant digits, the precision a
/// JSON number written through `f64` reads back unchanged.
const MAX_SIGNIFICANT_DIGITS: u32 = 15;

/// Product data handed to the cart when the user adds something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub image: String,
    pub unit_price: Decimal,
}

/// One product entry in the cart.
///
/// `quantity` is at least 1 and `price` is always `unit_price * quantity`.
/// Both are private so the pair can only change through the cart, which
/// recomputes the price on every quantity change. `unit_price` is rounded to
/// [`UNIT_PRICE_SCALE`] places and limited to 15 significant digits, so the
/// persisted cart reloads to equal line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub image: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    unit_price: Decimal,
    quantity: u32,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    price: Decimal,
}

impl LineItem {
    /// A fresh line item with quantity 1.
    ///
    /// Returns `None` if the unit price has more than 15 significant digits
    /// once rounded to [`UNIT_PRICE_SCALE`] places.
    #[must_use]
    pub fn new(item: NewLineItem) -> Option<Self> {
        let unit_price = normalize_unit_price(item.unit_price)?;
        Some(Self {
            id: item.id,
            title: item.title,
            category: item.category,
            image: item.image,
            unit_price,
            quantity: 1,
            price: unit_price,
        })
    }

    #[must_use]
    pub const fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line total, `unit_price * quantity`.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Set the quantity and recompute the price. Callers guarantee `quantity >= 1`.
    ///
    /// Leaves the item untouched and returns `false` if the price overflows.
    #[must_use]
    pub(crate) fn set_quantity(&mut self, quantity: u32) -> bool {
        debug_assert!(quantity >= 1);
        let Some(price) = self.unit_price.checked_mul(Decimal::from(quantity)) else {
            return false;
        };
        self.quantity = quantity;
        self.price = price;
        true
    }
}

/// Round to [`UNIT_PRICE_SCALE`] places and strip trailing zeros.
fn normalize_unit_price(unit_price: Decimal) -> Option<Decimal> {
    let rounded = unit_price
        .round_dp_with_strategy(UNIT_PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let limit = 10_u128.pow(MAX_SIGNIFICANT_DIGITS);
    (rounded.mantissa().unsigned_abs() < limit).then_some(rounded)
}

/// A line item as found in the persisted slot, before normalization.
///
/// Older records may lack `unitPrice`, hold prices as strings, or carry a
/// zero quantity, so every numeric field is optional here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredLineItem {
    id: ProductId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    unit_price: Option<Decimal>,
    #[serde(default)]
    price: Option<Decimal>,
    #[serde(default)]
    quantity: Option<u32>,
}

impl StoredLineItem {
    /// Normalize into a [`LineItem`].
    ///
    /// A missing or zero quantity becomes 1. A missing unit price is derived
    /// from `price / quantity` and rounded like any other unit price. The
    /// stored price is never trusted and is recomputed. Returns `None` when
    /// neither price field is present or the prices are out of range.
    pub(crate) fn into_line_item(self) -> Option<LineItem> {
        let quantity = self.quantity.filter(|&q| q >= 1).unwrap_or(1);
        let unit_price = match (self.unit_price, self.price) {
            (Some(unit), _) => unit,
            (None, Some(total)) => total.checked_div(Decimal::from(quantity))?,
            (None, None) => return None,
        };

        let mut item = LineItem::new(NewLineItem {
            id: self.id,
            title: self.title,
            category: self.category,
            image: self.image,
            unit_price,
        })?;
        item.set_quantity(quantity).then_some(item)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn stored(json: &str) -> StoredLineItem {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_new_starts_at_quantity_one() {
        let item = LineItem::new(NewLineItem {
            id: ProductId::parse("p1").unwrap(),
            title: "Mug".to_string(),
            category: "kitchen".to_string(),
            image: String::new(),
            unit_price: Decimal::new(1250, 2),
        })
        .unwrap();
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.price(), Decimal::new(1250, 2));
    }

    #[test]
    fn test_serializes_prices_as_numbers() {
        let item = stored(r#"{"id":"p1","unitPrice":10,"quantity":3}"#)
            .into_line_item()
            .unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["unitPrice"], serde_json::json!(10.0));
        assert_eq!(value["price"], serde_json::json!(30.0));
        assert_eq!(value["quantity"], serde_json::json!(3));
    }

    #[test]
    fn test_string_prices_are_accepted() {
        let item = stored(r#"{"id":"p1","price":"10.0","unitPrice":"10.0","quantity":2}"#)
            .into_line_item()
            .unwrap();
        assert_eq!(item.unit_price(), Decimal::from(10));
        assert_eq!(item.price(), Decimal::from(20));
    }

    #[test]
    fn test_missing_unit_price_is_derived() {
        let item = stored(r#"{"id":"p1","price":30,"quantity":3}"#)
            .into_line_item()
            .unwrap();
        assert_eq!(item.unit_price(), Decimal::from(10));
        assert_eq!(item.quantity(), 3);
    }

    #[test]
    fn test_stale_price_is_recomputed() {
        let item = stored(r#"{"id":"p1","price":10,"unitPrice":10,"quantity":4}"#)
            .into_line_item()
            .unwrap();
        assert_eq!(item.price(), Decimal::from(40));
    }

    #[test]
    fn test_zero_quantity_becomes_one() {
        let item = stored(r#"{"id":"p1","unitPrice":5,"quantity":0}"#)
            .into_line_item()
            .unwrap();
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.price(), Decimal::from(5));
    }

    #[test]
    fn test_no_price_at_all_is_dropped() {
        assert!(stored(r#"{"id":"p1","quantity":2}"#).into_line_item().is_none());
    }

    #[test]
    fn test_derived_unit_price_is_rounded() {
        let item = stored(r#"{"id":"p1","price":10,"quantity":3}"#)
            .into_line_item()
            .unwrap();
        assert_eq!(item.unit_price(), Decimal::new(33333, 4));
        assert_eq!(item.price(), Decimal::new(99999, 4));
    }

    #[test]
    fn test_trailing_zeros_round_trip() {
        let item = stored(r#"{"id":"p1","unitPrice":"12345678901.3000","quantity":2}"#)
            .into_line_item()
            .unwrap();
        let json = serde_json::to_string(&item).unwrap();
        let reloaded = stored(&json).into_line_item().unwrap();
        assert_eq!(reloaded, item);
        assert_eq!(reloaded.unit_price(), Decimal::new(123_456_789_013, 1));
    }

    #[test]
    fn test_unit_price_rounds_half_away_from_zero() {
        let item = stored(r#"{"id":"p1","unitPrice":"1.23455"}"#)
            .into_line_item()
            .unwrap();
        assert_eq!(item.unit_price(), Decimal::new(12346, 4));
    }

    #[test]
    fn test_oversized_unit_price_is_rejected() {
        let item = LineItem::new(NewLineItem {
            id: ProductId::parse("p1").unwrap(),
            title: "Yacht".to_string(),
            category: "boats".to_string(),
            image: String::new(),
            unit_price: Decimal::MAX,
        });
        assert!(item.is_none());

        let record =
            stored(r#"{"id":"p1","unitPrice":"10000000000000000000000000000","quantity":100}"#);
        assert!(record.into_line_item().is_none());
    }

    #[test]
    fn test_largest_quantity_keeps_price_exact() {
        let item = stored(r#"{"id":"p1","unitPrice":"99999999999.9999","quantity":4294967295}"#)
            .into_line_item()
            .unwrap();
        assert_eq!(item.quantity(), u32::MAX);
        assert_eq!(
            item.price(),
            Decimal::new(999_999_999_999_999, 4) * Decimal::from(u32::MAX)
        );
    }
}
