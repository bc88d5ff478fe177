//! Error types for the Item actor.

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur during item operations.
///
/// `Validation` and `NotFound` are user mistakes: recoverable, shown through the error
/// slot, never fatal.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// A supplied field broke an item invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No item has the requested id.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ItemError {
    fn from(msg: String) -> Self {
        ItemError::ActorCommunicationError(msg)
    }
}
