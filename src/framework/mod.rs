//! Generic single-writer store framework.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by the store
//! - [`ResourceState`] - Pure, ordered state container with an error slot
//! - [`ResourceActor`] - Task that owns a `ResourceState` and publishes its changes
//! - [`ResourceClient`] - Cloneable handle that sends requests to the actor
//! - [`ActorClient`] - Trait giving resource-specific clients the common operations
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See the `mock` module (test builds only) for driving clients without an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
#[cfg(test)]
pub mod mock;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use state::{ResourceState, StoreSnapshot};
pub use self::tracing::setup_tracing;
