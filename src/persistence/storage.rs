//! The key-value storage seam and its in-memory backend.

use super::error::PersistError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Asynchronous string key-value storage.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, PersistError>;

    async fn set(&self, key: &str, value: String) -> Result<(), PersistError>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), PersistError>;
}

/// Process-local storage. Clones share the same map, so a test can keep one handle
/// and inspect what another component wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), PersistError> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PersistError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
