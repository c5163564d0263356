//! Collection-scoped key/value persistence
//!
//! Each collection (`leaderboard`, `users`, `session`) holds one JSON
//! document. Stores are injected into whoever needs them; nothing reaches
//! for ambient global storage.

pub mod file;
pub mod memory;
pub mod session;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use session::{FixedIdentity, Identity, SessionIdentity};

use thiserror::Error;

/// Best score per user
pub const LEADERBOARD: &str = "leaderboard";
/// Currently signed-in username
pub const SESSION: &str = "session";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid collection name '{0}'")]
    InvalidCollection(String),
}

/// A persisted set of named JSON documents
pub trait Store {
    /// Raw document for a collection, `None` if it was never written
    fn get(&self, collection: &str) -> Result<Option<String>, StoreError>;

    /// Replace a collection's document
    fn set(&mut self, collection: &str, value: &str) -> Result<(), StoreError>;

    /// Forget a collection entirely
    fn remove(&mut self, collection: &str) -> Result<(), StoreError>;
}

/// Collection names are plain identifiers so they map safely onto file names
pub(crate) fn validate_collection(collection: &str) -> Result<(), StoreError> {
    let valid = !collection.is_empty()
        && collection.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidCollection(collection.to_string()))
    }
}
