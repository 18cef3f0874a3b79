//! In-memory key-value store for testing.
//!
//! Provides a `BTreeMap`-backed store that doesn't persist data, with an
//! optional byte quota and a write log for assertions.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::error::HostError;
use crate::store::KeyValueStore;

/// In-memory store for testing.
pub struct MemoryStore {
    /// Stored entries (key -> value)
    entries: RefCell<BTreeMap<String, String>>,
    /// Total value bytes allowed, `None` for unlimited
    quota_bytes: Option<usize>,
    /// Every accepted write, in order (key, value)
    write_log: RefCell<Vec<(String, String)>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store with no quota.
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            quota_bytes: None,
            write_log: RefCell::new(Vec::new()),
        }
    }

    /// Create a store that rejects writes once total value bytes would
    /// exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            quota_bytes: Some(quota_bytes),
            write_log: RefCell::new(Vec::new()),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Total bytes across all stored values.
    pub fn used_bytes(&self) -> usize {
        self.entries.borrow().values().map(|v| v.len()).sum()
    }

    /// Number of accepted writes so far.
    pub fn write_count(&self) -> usize {
        self.write_log.borrow().len()
    }

    /// All accepted writes in order (for assertions).
    pub fn writes(&self) -> Vec<(String, String)> {
        self.write_log.borrow().clone()
    }

    /// Check if a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        if let Some(quota) = self.quota_bytes {
            let existing = self
                .entries
                .borrow()
                .get(key)
                .map(|v| v.len())
                .unwrap_or(0);
            if self.used_bytes() - existing + value.len() > quota {
                return Err(HostError::QuotaExceeded);
            }
        }

        self.entries
            .borrow_mut()
            .insert(String::from(key), String::from(value));
        self.write_log
            .borrow_mut()
            .push((String::from(key), String::from(value)));
        Ok(())
    }
}
