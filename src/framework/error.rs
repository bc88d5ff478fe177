//! # Framework Errors
//!
//! Common error types used by the store actor and its clients.

/// Errors that can occur within the actor framework itself.
///
/// The `Display` output of each variant is what lands in the store's `error` slot,
/// so entity errors are rendered without a prefix.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("{0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
