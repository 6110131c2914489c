//! Persisted key-value slots.
//!
//! The cart survives restarts by writing its whole state into a named slot
//! after every mutation. A slot holds one string (JSON in practice); keys are
//! short ASCII names so they can double as file names.
//!
//! # Slots
//!
//! - [`CART_SLOT`] - JSON array of line items
//! - [`LAST_ORDER_SLOT`] - summary of the most recent checkout

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Slot holding the serialized cart.
pub const CART_SLOT: &str = "cart";

/// Slot holding the last order summary written at checkout.
pub const LAST_ORDER_SLOT: &str = "lastOrder";

/// Errors that can occur when reading or writing a slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Slot key contains characters that cannot be stored.
    #[error("Invalid slot key: {0:?}")]
    InvalidKey(String),

    /// Underlying I/O failed.
    #[error("I/O error on slot {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Value could not be serialized before writing.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing store refused the write.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A durable string-keyed store of string values.
pub trait SlotStore {
    /// Read a slot. Returns `Ok(None)` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backing store fails.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the contents of a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backing store fails.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot. Removing an absent slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backing store fails.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Check that a slot key is non-empty and limited to `[A-Za-z0-9_-]`.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key(CART_SLOT).is_ok());
        assert!(validate_key(LAST_ORDER_SLOT).is_ok());
        assert!(validate_key("with-dash_and_underscore").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("a b").is_err());
    }
}
