//! In-process store (tests, demos, wasm builds without storage)

use std::collections::HashMap;

use super::{Store, StoreError, validate_collection};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, collection: &str) -> Result<Option<String>, StoreError> {
        validate_collection(collection)?;
        Ok(self.documents.get(collection).cloned())
    }

    fn set(&mut self, collection: &str, value: &str) -> Result<(), StoreError> {
        validate_collection(collection)?;
        self.documents.insert(collection.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, collection: &str) -> Result<(), StoreError> {
        validate_collection(collection)?;
        self.documents.remove(collection);
        Ok(())
    }
}
