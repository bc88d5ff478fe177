//! # ActorClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default `get`,
//! `delete`, `snapshot`, `clear_error` and `dismiss_error` methods built on top of a
//! generic `ResourceClient`.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, StoreSnapshot};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard store operations.
///
/// An implementor supplies the inner [`ResourceClient`] and a mapping from
/// [`FrameworkError`] to its own error type; everything else is provided.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Read the whole store.
    async fn snapshot(&self) -> Result<StoreSnapshot<T>, Self::Error> {
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Reset the error slot. Always succeeds while the actor is running.
    #[tracing::instrument(skip(self))]
    async fn clear_error(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().clear_error().await.map_err(Self::map_error)
    }

    /// Reset the error slot if it still holds the failure recorded at `error_revision`.
    ///
    /// Returns `false` when the slot is empty or holds a later failure.
    #[tracing::instrument(skip(self))]
    async fn dismiss_error(&self, error_revision: u64) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .dismiss_error(error_revision)
            .await
            .map_err(Self::map_error)
    }
}
