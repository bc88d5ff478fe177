//! # Generic Messages
//!
//! Message types passed between [`ResourceClient`](crate::framework::ResourceClient) and
//! [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::state::StoreSnapshot;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// # The CRUD Pattern
/// The first five variants map to lifecycle operations on a single entity plus a custom
/// `Action` for resource-specific logic. The remaining variants act on the store as a
/// whole: reading a snapshot, clearing the error slot, and toggling the loading flag.
///
/// Every variant is generic over `T: ActorEntity`, so a payload for one entity type can't
/// be sent to an actor managing another.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Snapshot {
        respond_to: Response<StoreSnapshot<T>>,
    },
    ClearError {
        respond_to: Response<()>,
    },
    /// Clears the error slot only if it still holds the failure recorded at
    /// `error_revision`. Responds with whether it did.
    DismissError {
        error_revision: u64,
        respond_to: Response<bool>,
    },
    SetLoading {
        loading: bool,
        respond_to: Response<()>,
    },
}
