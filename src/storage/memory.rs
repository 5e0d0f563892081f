//! In-memory key-value store
//!
//! Backs the wallet in tests. An optional byte quota makes writes fail the
//! way a full browser store does, so partial-write behavior can be observed.

use crate::storage::KeyValueStore;
use crate::types::WalletError;
use std::collections::HashMap;

/// In-memory key-value store
///
/// The quota, when set, bounds the summed length of all keys and values.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Map of key to stored value
    entries: HashMap<String, String>,

    /// Maximum total size in bytes, if bounded
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty, unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects writes beyond `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        MemoryStore {
            entries: HashMap::new(),
            quota: Some(bytes),
        }
    }

    /// Change the quota of an existing store
    pub fn set_quota(&mut self, bytes: Option<usize>) {
        self.quota = bytes;
    }

    /// Total size in bytes of all keys and values
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WalletError> {
        if let Some(quota) = self.quota {
            let replaced = self.entries.get(key).map_or(0, |old| key.len() + old.len());
            let after = self.used_bytes() - replaced + key.len() + value.len();
            if after > quota {
                return Err(WalletError::quota_exceeded(key));
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), WalletError> {
        self.entries.remove(key);
        Ok(())
    }
}
