//! Key-value storage backends
//!
//! The wallet keeps all of its state as string values under a handful of
//! string keys. This module defines the [`KeyValueStore`] abstraction and
//! its implementations:
//! - [`MemoryStore`] - in-process map, optionally bounded by a byte quota
//! - [`FileStore`] - JSON object on disk, rewritten on every write

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::types::WalletError;

/// String-keyed, string-valued storage
///
/// Reads never fail; a missing key is `None`. Writes may fail (I/O, quota),
/// and a failed write leaves earlier writes in place.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), WalletError>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<(), WalletError>;
}
