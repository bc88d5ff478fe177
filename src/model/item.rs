//! The shopping-list item and its payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Stable identifier for Items. Assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// A fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single shopping-list entry.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Item`](#impl-ActorEntity-for-Item) for details on:
/// - Creation parameters ([`NewItem`])
/// - Update parameters ([`ItemUpdate`])
/// - Custom actions ([`ItemAction`](crate::item_actor::ItemAction))
///
/// Serialized with camelCase keys (`createdAt`, `updatedAt`) and RFC 3339 timestamps,
/// which is the persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub purchased: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for adding an item. The name is trimmed and both fields are validated by
/// the store.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Partial update for an existing item. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub purchased: Option<bool>,
}

impl ItemUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn purchased(mut self, purchased: bool) -> Self {
        self.purchased = Some(purchased);
        self
    }
}
