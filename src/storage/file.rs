//! File-backed key-value store
//!
//! Persists the whole key space as a single JSON object, e.g.
//!
//! ```json
//! { "balance": "60", "isLogged": "true", "transactions": "[...]" }
//! ```
//!
//! The file is read once on open and rewritten in full after every write.
//! Writes go to a temporary file in the same directory which is then
//! renamed over the store, so the file on disk is always a complete object.
//!
//! Values that are not strings are kept as their JSON text, and `null`
//! entries are dropped, one key at a time. A file that is not a JSON object
//! at all is moved aside to `<name>.bak` and the store starts empty, so a
//! damaged profile never blocks the wallet and is never silently overwritten.

use crate::storage::KeyValueStore;
use crate::types::WalletError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// File-backed key-value store
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Location of the JSON file
    path: PathBuf,

    /// In-memory copy of the file contents
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if a
    /// malformed file cannot be moved to its backup path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => Self::decode(&path, &contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "store file not found, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(FileStore { path, entries })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a malformed store file is moved before starting empty
    pub fn backup_path(&self) -> PathBuf {
        backup_path_for(&self.path)
    }

    fn decode(path: &Path, contents: &str) -> Result<BTreeMap<String, String>, WalletError> {
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let object: Map<String, Value> = match serde_json::from_str(contents) {
            Ok(object) => object,
            Err(e) => {
                let backup = backup_path_for(path);
                warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    error = %e,
                    "store file is malformed, moving it aside and starting empty"
                );
                fs::rename(path, &backup)?;
                return Ok(BTreeMap::new());
            }
        };

        let mut entries = BTreeMap::new();
        for (key, value) in object {
            match value {
                Value::String(text) => {
                    entries.insert(key, text);
                }
                Value::Null => {
                    warn!(key = %key, "dropping null store entry");
                }
                other => {
                    warn!(key = %key, "store entry is not a string, keeping its JSON text");
                    entries.insert(key, other.to_string());
                }
            }
        }
        Ok(entries)
    }

    fn flush(&self) -> Result<(), WalletError> {
        let encoded = serde_json::to_string_pretty(&self.entries)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(encoded.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), keys = self.entries.len(), "store flushed");
        Ok(())
    }
}

fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("store"));
    name.push(".bak");
    path.with_file_name(name)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WalletError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());

        if let Err(e) = self.flush() {
            // Keep memory consistent with what is on disk
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), WalletError> {
        if let Some(old) = self.entries.remove(key) {
            if let Err(e) = self.flush() {
                self.entries.insert(key.to_string(), old);
                return Err(e);
            }
        }
        Ok(())
    }
}
