//! Durable key-value persistence for the basket.
//!
//! The basket lives under two independent entries: the serialized line
//! items ([`ITEMS_KEY`]) and the stringified unit count ([`COUNT_KEY`]),
//! the same layout the web storefront kept in browser local storage.
//! Reads degrade to an empty basket on any failure; writes are
//! fire-and-forget.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use thiserror::Error;

use crate::item::LineItem;

/// Storage key for the serialized line-item sequence.
pub const ITEMS_KEY: &str = "basketItems";

/// Storage key for the stringified unit count.
pub const COUNT_KEY: &str = "basketCount";

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stored data could not be parsed.
    #[error("storage is corrupt: {0}")]
    Corrupt(String),
}

/// A durable string key-value store.
///
/// Methods take `&self` so implementations are free to use interior
/// mutability. The basket owns one backend and writes through it after
/// every mutation.
pub trait KeyValueStore {
    /// Retrieve the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).put(key, value)
    }
}

/// File-backed store: one JSON object mapping keys to string values.
///
/// The file is the storage namespace. Writes rewrite the whole file
/// synchronously; there is no retry or partial-write handling.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // An unreadable namespace is replaced wholesale rather than
        // propagated; the write itself still reports failures.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_owned(), value.to_owned());
        let raw =
            serde_json::to_string(&entries).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store used by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Load the stored line items, degrading to an empty basket on any failure.
pub(crate) fn load_items<S: KeyValueStore>(storage: &S) -> Vec<LineItem> {
    let raw = match storage.get(ITEMS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("failed to read stored basket, starting empty: {e}");
            return Vec::new();
        }
    };

    let items: Vec<LineItem> = match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("stored basket is malformed, starting empty: {e}");
            return Vec::new();
        }
    };

    // Zero quantities and duplicate names cannot come from basket
    // operations, only from hand-edited or corrupt storage.
    if let Err(reason) = validate(&items) {
        tracing::warn!("stored basket violates invariants ({reason}), starting empty");
        return Vec::new();
    }

    items
}

fn validate(items: &[LineItem]) -> Result<(), &'static str> {
    if items.iter().any(|item| item.quantity == 0) {
        return Err("zero-quantity line");
    }
    let mut seen = HashSet::new();
    if items.iter().any(|item| !seen.insert(item.name.as_str())) {
        return Err("duplicate product name");
    }
    Ok(())
}

/// Load the stored unit count, if present and parseable.
pub(crate) fn load_count<S: KeyValueStore>(storage: &S) -> Option<u32> {
    let raw = storage.get(COUNT_KEY).ok().flatten()?;
    raw.trim().parse().ok()
}

/// Write both entries. Callers treat failures as fire-and-forget.
pub(crate) fn save<S: KeyValueStore>(
    storage: &S,
    items: &[LineItem],
    count: u32,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(items).map_err(|e| StoreError::Corrupt(e.to_string()))?;
    storage.put(ITEMS_KEY, &raw)?;
    storage.put(COUNT_KEY, &count.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use uplift_core::Price;

    fn line(name: &str, quantity: u32) -> LineItem {
        LineItem {
            name: name.to_owned(),
            price: Price::parse("10").unwrap(),
            quantity,
            image: "pro-desk".to_owned(),
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());
        store.put("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("basket.json"));
        assert!(store.get(ITEMS_KEY).unwrap().is_none());
        store.put(ITEMS_KEY, "[]").unwrap();
        store.put(COUNT_KEY, "0").unwrap();
        assert_eq!(store.get(ITEMS_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get(COUNT_KEY).unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn test_file_store_corrupt_file_errors_on_get() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("basket.json");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(path);
        assert!(matches!(
            store.get(ITEMS_KEY),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn test_file_store_put_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("basket.json");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(path);
        store.put(COUNT_KEY, "3").unwrap();
        assert_eq!(store.get(COUNT_KEY).unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_load_items_missing_key() {
        let store = MemoryStore::new();
        assert!(load_items(&store).is_empty());
    }

    #[test]
    fn test_load_items_malformed_json() {
        let store = MemoryStore::new();
        store.put(ITEMS_KEY, "{{nonsense").unwrap();
        assert!(load_items(&store).is_empty());
    }

    #[test]
    fn test_load_items_rejects_zero_quantity() {
        let store = MemoryStore::new();
        let raw = serde_json::to_string(&[line("Monitor Arm", 0)]).unwrap();
        store.put(ITEMS_KEY, &raw).unwrap();
        assert!(load_items(&store).is_empty());
    }

    #[test]
    fn test_load_items_rejects_duplicate_names() {
        let store = MemoryStore::new();
        let raw =
            serde_json::to_string(&[line("Monitor Arm", 1), line("Monitor Arm", 2)]).unwrap();
        store.put(ITEMS_KEY, &raw).unwrap();
        assert!(load_items(&store).is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let items = vec![line("Monitor Arm", 2), line("Essential Desk", 1)];
        save(&store, &items, 3).unwrap();
        assert_eq!(load_items(&store), items);
        assert_eq!(load_count(&store), Some(3));
    }

    #[test]
    fn test_load_count_unparseable() {
        let store = MemoryStore::new();
        store.put(COUNT_KEY, "many").unwrap();
        assert_eq!(load_count(&store), None);
    }
}
