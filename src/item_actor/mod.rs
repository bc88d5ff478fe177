//! Item-specific resource logic and entity implementation.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ItemClient;
use crate::framework::ResourceActor;
use crate::model::{Item, ItemId};

/// Creates a new Item actor, seeded with `items`, and its client.
///
/// Each created item gets a fresh random [`ItemId`].
pub fn new(buffer_size: usize, items: Vec<Item>) -> (ResourceActor<Item>, ItemClient) {
    let (actor, generic_client) = ResourceActor::with_items(buffer_size, items, ItemId::generate);
    let client = ItemClient::new(generic_client);

    (actor, client)
}
