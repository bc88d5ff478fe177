//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod item;

pub use item::*;
