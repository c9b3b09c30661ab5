use burrow_core::storage::Result;
use burrow_core::{ShortCode, Storage, StorageError};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory implementation of the Storage trait.
///
/// A single readers-writer lock guards the whole map: lookups run in
/// parallel, and a write excludes every other reader and writer until the
/// key has been replaced. Entries live until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    lookup: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new store with room for `capacity` entries before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lookup: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Number of stored codes.
    pub fn len(&self) -> usize {
        self.lookup.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.read().is_empty()
    }
}

impl Storage for InMemoryStore {
    fn set(&self, code: &ShortCode, original_url: &str) -> Result<()> {
        self.lookup
            .write()
            .insert(code.as_str().to_owned(), original_url.to_owned());
        Ok(())
    }

    fn get(&self, code: &ShortCode) -> Result<String> {
        self.lookup
            .read()
            .get(code.as_str())
            .cloned()
            .ok_or_else(|| StorageError::KeyNotFound(code.to_string()))
    }
}
