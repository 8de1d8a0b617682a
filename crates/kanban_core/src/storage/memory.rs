//! In-process key-value medium for tests and ephemeral sessions.

use super::{KeyValueStore, StorageError, StorageResult};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Single-threaded in-memory medium.
#[derive(Debug)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    available: bool,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    /// Creates an empty, available medium.
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            available: true,
            fail_writes: Cell::new(false),
        }
    }

    /// Creates a medium that reports itself as absent.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Seeds `key` with raw `value` (builder form of [`KeyValueStore::set`]).
    pub fn with_entry(self, key: &str, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.into());
        self
    }

    /// Makes subsequent writes fail, to exercise error paths.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Backend("memory store is read-only".to_string()));
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::storage::KeyValueStore;

    #[test]
    fn set_get_remove_roundtrip() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn failing_writes_leave_entries_untouched() {
        let store = MemoryStore::new().with_entry("k", "v");
        store.set_fail_writes(true);

        assert!(store.set("k", "other").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn unavailable_store_reports_absence() {
        assert!(!MemoryStore::unavailable().is_available());
        assert!(MemoryStore::new().is_available());
    }
}
