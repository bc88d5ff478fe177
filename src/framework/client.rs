//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Response};
use crate::framework::state::StoreSnapshot;
use tokio::sync::{mpsc, oneshot, watch};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds the request sender plus a receiver for state snapshots, so cloning is cheap and
/// clones can be shared across tasks. The actor keeps running while any clone is alive.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
    snapshots: watch::Receiver<StoreSnapshot<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            snapshots: self.snapshots.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(
        sender: mpsc::Sender<ResourceRequest<T>>,
        snapshots: watch::Receiver<StoreSnapshot<T>>,
    ) -> Self {
        Self { sender, snapshots }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    pub async fn snapshot(&self) -> Result<StoreSnapshot<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Snapshot { respond_to })
            .await
    }

    pub async fn clear_error(&self) -> Result<(), FrameworkError> {
        self.call(|respond_to| ResourceRequest::ClearError { respond_to })
            .await
    }

    pub async fn dismiss_error(&self, error_revision: u64) -> Result<bool, FrameworkError> {
        self.call(|respond_to| ResourceRequest::DismissError {
            error_revision,
            respond_to,
        })
        .await
    }

    pub async fn set_loading(&self, loading: bool) -> Result<(), FrameworkError> {
        self.call(|respond_to| ResourceRequest::SetLoading {
            loading,
            respond_to,
        })
        .await
    }

    /// A receiver that observes every state change published by the actor.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot<T>> {
        self.snapshots.clone()
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
