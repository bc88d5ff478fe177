//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a resource must implement to be managed
//! by the generic [`ResourceActor`](crate::framework::ResourceActor). It names the
//! associated types for IDs, DTOs, actions, context, and errors, and provides the
//! lifecycle hooks the store calls while applying a request.
//!
//! # Architecture Note
//! The hooks are synchronous and only touch `self`. All effects (publishing commits,
//! persisting, notifying) happen outside the entity, so the transition logic can be
//! exercised directly in unit tests without spawning anything.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_delete`] has a default implementation that does nothing.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Context
/// The `Context` type is injected into every hook. It is handed to
/// [`ResourceActor::run`](crate::framework::ResourceActor::run) instead of the
/// constructor, so dependencies such as a clock can be wired late.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// A partial set of fields for an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `TogglePurchased`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into every hook.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per entity rather than one per message: clients match on a single
    /// error type for every operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this instance.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a freshly generated ID and the payload.
    ///
    /// Returning an error rejects the create; nothing is inserted.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Apply an update.
    ///
    /// The store calls this on a draft copy and only keeps the draft when the hook
    /// returns `Ok`, so an implementation may return early after partial writes.
    fn on_update(&mut self, update: Self::Update, ctx: &Self::Context) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action. Runs on a draft, like `on_update`.
    fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
