//! Custom actions for the Item actor.
//!
//! Operations on an [`Item`](crate::model::Item) beyond plain create/update/delete.
//! They are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    /// Flips `purchased` and refreshes `updated_at`.
    TogglePurchased,
}

/// Results from ItemActions - variants match 1:1 with ItemAction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemActionResult {
    /// The `purchased` value after the flip.
    TogglePurchased(bool),
}
