//! ActorEntity trait implementation for the Item domain type.
//!
//! This is where the shopping-list rules live: names are trimmed and must not be empty,
//! quantities must be positive, and every successful change refreshes `updated_at` from
//! the injected clock. On `add` the name is checked before the quantity, so only the
//! first problem is reported.

use super::actions::{ItemAction, ItemActionResult};
use super::error::ItemError;
use crate::clock::SharedClock;
use crate::framework::ActorEntity;
use crate::model::{Item, ItemId, ItemUpdate, NewItem};
use crate::validation::{validate_name, validate_quantity};

impl ActorEntity for Item {
    type Id = ItemId;
    type Create = NewItem;
    type Update = ItemUpdate;
    type Action = ItemAction;
    type ActionResult = ItemActionResult;
    type Context = SharedClock;
    type Error = ItemError;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn from_create_params(id: ItemId, params: NewItem, clock: &SharedClock) -> Result<Self, ItemError> {
        let name = validate_name(&params.name)?;
        let quantity = validate_quantity(params.quantity)?;
        let now = clock.now();
        Ok(Self {
            id,
            name,
            quantity,
            purchased: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Validates every supplied field before touching any of them.
    fn on_update(&mut self, update: ItemUpdate, clock: &SharedClock) -> Result<(), ItemError> {
        let name = update.name.as_deref().map(validate_name).transpose()?;
        let quantity = update.quantity.map(validate_quantity).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(quantity) = quantity {
            self.quantity = quantity;
        }
        if let Some(purchased) = update.purchased {
            self.purchased = purchased;
        }
        self.updated_at = clock.now();
        Ok(())
    }

    fn handle_action(&mut self, action: ItemAction, clock: &SharedClock) -> Result<ItemActionResult, ItemError> {
        match action {
            ItemAction::TogglePurchased => {
                self.purchased = !self.purchased;
                self.updated_at = clock.now();
                Ok(ItemActionResult::TogglePurchased(self.purchased))
            }
        }
    }
}
