//! The persisted record and the save/load pair built on it.
//!
//! Layout under [`ROOT_KEY`]:
//!
//! ```json
//! {"items": [{"id": "...", "name": "Eggs", "quantity": 12, "purchased": false,
//!             "createdAt": "2024-03-01T08:00:00Z", "updatedAt": "2024-03-01T08:00:00Z"}],
//!  "_persist": {"version": 1}}
//! ```
//!
//! Only the items are written. The error slot, the loading flag and the revision are
//! session state and start cleared on every launch.

use super::error::PersistError;
use super::storage::KeyValueStorage;
use crate::model::Item;
use crate::validation::{is_valid_name, is_valid_quantity};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Storage key of the persisted record.
pub const ROOT_KEY: &str = "persist:root";

/// Layout version written into `_persist.version`. Records with any other version are
/// ignored on load.
pub const PERSIST_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct PersistMeta {
    version: u32,
}

#[derive(Serialize)]
struct RecordRef<'a> {
    items: &'a [Item],
    #[serde(rename = "_persist")]
    meta: PersistMeta,
}

#[derive(Deserialize)]
struct Record {
    items: Vec<Item>,
    #[serde(rename = "_persist")]
    meta: PersistMeta,
}

/// Saves and restores the item sequence through a [`KeyValueStorage`].
#[derive(Clone)]
pub struct Persistor {
    storage: Arc<dyn KeyValueStorage>,
}

impl Persistor {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub async fn save(&self, items: &[Item]) -> Result<(), PersistError> {
        let record = RecordRef {
            items,
            meta: PersistMeta {
                version: PERSIST_VERSION,
            },
        };
        let json = serde_json::to_string(&record)?;
        self.storage.set(ROOT_KEY, json).await?;
        debug!(count = items.len(), "Saved items");
        Ok(())
    }

    /// Restores the persisted items.
    ///
    /// Never fails: a missing key, an unreadable or unparsable record, an unknown
    /// version, or a list that breaks an item invariant all yield an empty list.
    pub async fn load(&self) -> Vec<Item> {
        let raw = match self.storage.get(ROOT_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No saved items, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "Could not read saved items, starting empty");
                return Vec::new();
            }
        };

        match decode(&raw) {
            Ok(items) => {
                info!(count = items.len(), "Restored items");
                items
            }
            Err(reason) => {
                warn!(%reason, "Discarding saved items, starting empty");
                Vec::new()
            }
        }
    }

    /// Deletes the persisted record.
    pub async fn clear(&self) -> Result<(), PersistError> {
        self.storage.remove(ROOT_KEY).await
    }
}

fn decode(raw: &str) -> Result<Vec<Item>, String> {
    let record: Record = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if record.meta.version != PERSIST_VERSION {
        return Err(format!("unsupported version {}", record.meta.version));
    }

    let mut seen = HashSet::new();
    for item in &record.items {
        if !seen.insert(item.id.clone()) {
            return Err(format!("duplicate id {}", item.id));
        }
        if !is_valid_name(&item.name) {
            return Err(format!("item {} has an empty name", item.id));
        }
        if !is_valid_quantity(item.quantity) {
            return Err(format!("item {} has quantity {}", item.id, item.quantity));
        }
    }
    Ok(record.items)
}
