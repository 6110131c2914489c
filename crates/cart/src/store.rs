//! The cart state manager.
//!
//! [`CartStore`] owns the ordered list of line items and writes the whole
//! list to the [`CART_SLOT`] after every mutation. Mutations on unknown ids
//! are no-ops, never errors. A failed write is logged and the in-memory state
//! stays authoritative for the rest of the session.

use rust_decimal::Decimal;
use shopfront_core::ProductId;
use tracing::{debug, error, info, warn};

use crate::models::{LineItem, NewLineItem, StoredLineItem};
use crate::storage::{CART_SLOT, SlotStore, StorageError};

/// Result of [`CartStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Added<'a> {
    /// The line item after the add.
    pub item: &'a LineItem,
    /// `true` if the product was not in the cart before.
    pub was_new: bool,
}

/// Cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of `unit_price * quantity` over all items.
    pub subtotal: Decimal,
    /// Shipping cost the totals were computed with.
    pub shipping: Decimal,
    /// `subtotal + shipping`.
    pub total: Decimal,
}

/// Ordered cart line items mirrored to a persisted slot.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    items: Vec<LineItem>,
}

impl<S: SlotStore> CartStore<S> {
    /// Load the cart from `storage`.
    ///
    /// An absent, unreadable or corrupt slot yields an empty cart. Individual
    /// records that fail to parse are skipped, and duplicate ids are merged
    /// into their first occurrence.
    pub fn load(storage: S) -> Self {
        let items = match storage.read(CART_SLOT) {
            Ok(Some(raw)) => parse_items(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read cart, starting empty");
                Vec::new()
            }
        };

        debug!(items = items.len(), "Cart loaded");
        Self { storage, items }
    }

    /// Add one unit of a product.
    ///
    /// Increments the quantity if the product is already in the cart,
    /// otherwise appends a new line item with quantity 1. Returns `None`
    /// without touching anything if the unit price is out of range or the
    /// quantity is already at its maximum.
    pub fn add(&mut self, item: NewLineItem) -> Option<Added<'_>> {
        let (index, was_new) = match self.position(&item.id) {
            Some(index) => {
                let existing = self.items.get_mut(index)?;
                let updated = existing
                    .quantity()
                    .checked_add(1)
                    .is_some_and(|quantity| existing.set_quantity(quantity));
                if !updated {
                    warn!(product_id = %item.id, "Quantity limit reached, ignoring add");
                    return None;
                }
                (index, false)
            }
            None => {
                let product_id = item.id.clone();
                let Some(line_item) = LineItem::new(item) else {
                    warn!(product_id = %product_id, "Unit price out of range, ignoring add");
                    return None;
                };
                info!(product_id = %product_id, "Adding new line item");
                self.items.push(line_item);
                (self.items.len() - 1, true)
            }
        };

        self.persist();

        let item = self.items.get(index)?;
        Some(Added { item, was_new })
    }

    /// Adjust an item's quantity by `delta`.
    ///
    /// Returns `None` without touching anything if `id` is not in the cart,
    /// the new quantity would drop below 1, or the quantity or price would
    /// overflow. Quantities only reach zero through [`Self::remove`].
    pub fn change_quantity(&mut self, id: &ProductId, delta: i32) -> Option<&LineItem> {
        let index = self.position(id)?;
        let item = self.items.get_mut(index)?;

        let quantity = i64::from(item.quantity()) + i64::from(delta);
        if quantity < 1 {
            debug!(product_id = %id, "Quantity change would drop below 1, ignoring");
            return None;
        }
        let quantity = u32::try_from(quantity).ok()?;
        if !item.set_quantity(quantity) {
            warn!(product_id = %id, quantity, "Quantity change overflows the price, ignoring");
            return None;
        }

        self.persist();
        self.items.get(index)
    }

    /// Remove an item. Returns the removed item, or `None` if it was absent.
    pub fn remove(&mut self, id: &ProductId) -> Option<LineItem> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        info!(product_id = %id, "Removed line item");
        self.persist();
        Some(removed)
    }

    /// Subtotal and total for a given shipping cost. Pure.
    ///
    /// Sums saturate at [`Decimal::MAX`] instead of overflowing.
    #[must_use]
    pub fn compute_totals(&self, shipping: Decimal) -> Totals {
        let subtotal = self.items.iter().fold(Decimal::ZERO, |subtotal, item| {
            let line = item.unit_price().saturating_mul(Decimal::from(item.quantity()));
            subtotal.saturating_add(line)
        });

        Totals {
            subtotal,
            shipping,
            total: subtotal.saturating_add(shipping),
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Number of line items (not the sum of quantities).
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Backing slot store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub(crate) const fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Write the cart to its slot, surfacing any error.
    ///
    /// Mutating operations call this internally and only log failures; use it
    /// directly when the caller needs to know the write landed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the slot write fails.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.items)?;
        self.storage.write(CART_SLOT, &json)
    }

    fn persist(&mut self) {
        if let Err(e) = self.flush() {
            error!(error = %e, items = self.items.len(), "Failed to persist cart");
        }
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}

/// Parse the persisted cart, tolerating bad records.
fn parse_items(raw: &str) -> Vec<LineItem> {
    let records: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, "Cart slot is corrupt, starting empty");
            return Vec::new();
        }
    };

    let mut items: Vec<LineItem> = Vec::with_capacity(records.len());
    for record in records {
        let item = match serde_json::from_value::<StoredLineItem>(record) {
            Ok(stored) => stored.into_line_item(),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable cart record");
                continue;
            }
        };
        let Some(item) = item else {
            warn!("Skipping cart record without a usable price");
            continue;
        };

        if let Some(existing) = items.iter_mut().find(|existing| existing.id == item.id) {
            warn!(product_id = %item.id, "Merging duplicate cart record");
            let merged = existing
                .quantity()
                .checked_add(item.quantity())
                .is_some_and(|quantity| existing.set_quantity(quantity));
            if !merged {
                warn!(product_id = %item.id, "Merged quantity out of range, keeping first record");
            }
        } else {
            items.push(item);
        }
    }
    items
}
