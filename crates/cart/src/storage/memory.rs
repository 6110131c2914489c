//! In-memory slot store for tests and throwaway sessions.

use std::collections::HashMap;

use super::{SlotStore, StorageError, validate_key};

/// Slot store backed by a `HashMap`. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper that pre-populates a slot.
    #[must_use]
    pub fn with_slot(mut self, key: &str, value: impl Into<String>) -> Self {
        self.slots.insert(key.to_string(), value.into());
        self
    }

    /// Number of slots currently written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_slot() {
        let store = MemoryStore::new();
        assert_eq!(store.read("cart").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let mut store = MemoryStore::new();
        store.write("cart", "[]").unwrap();
        assert_eq!(store.read("cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_ok() {
        let mut store = MemoryStore::new().with_slot("cart", "[]");
        store.remove("lastOrder").unwrap();
        store.remove("cart").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_rejects_invalid_key() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.write("no/slashes", "x"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
