//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the single writer that owns a
//! [`ResourceState`] and processes requests sequentially.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::message::ResourceRequest;
use crate::framework::state::{ResourceState, StoreSnapshot};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the receiver end
/// of the request channel. Requests are handled one at a time in a single task, so the
/// state needs no `Mutex` or `RwLock`.
///
/// # Signals
/// The actor publishes on two `watch` channels:
/// - **commits**: the entity sequence, after every successful create, update, delete,
///   or action. Persistence subscribes here.
/// - **snapshots**: the full [`StoreSnapshot`], after every state change including
///   failures. Observers of the error slot subscribe here.
///
/// `watch` keeps only the newest value, so a slow subscriber skips intermediate states
/// and always ends up on the latest one.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and a client.
/// 2.  **Subscribe**: take any receivers you need with [`ResourceActor::subscribe_commits`].
/// 3.  **Run**: spawn `actor.run(context)` in a background task.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    state: ResourceState<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
    commits: watch::Sender<Vec<T>>,
    snapshots: watch::Sender<StoreSnapshot<T>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an empty actor and its client.
    ///
    /// * `buffer_size` - capacity of the request channel; senders wait when it is full.
    /// * `next_id_fn` - generates the ID for each created entity.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::with_items(buffer_size, Vec::new(), next_id_fn)
    }

    /// Creates an actor seeded with `items`, e.g. restored from storage.
    pub fn with_items(
        buffer_size: usize,
        items: Vec<T>,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let state = ResourceState::from_items(items);
        let (commits, _) = watch::channel(state.items().to_vec());
        let (snapshots, snapshot_receiver) = watch::channel(state.snapshot());
        let actor = Self {
            receiver,
            state,
            next_id_fn: Box::new(next_id_fn),
            commits,
            snapshots,
        };
        let client = ResourceClient::new(sender, snapshot_receiver);
        (actor, client)
    }

    /// Subscribes to committed entity sequences.
    ///
    /// The current sequence counts as already seen; only later commits wake the receiver.
    pub fn subscribe_commits(&self) -> watch::Receiver<Vec<T>> {
        self.commits.subscribe()
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Item" instead of "shopping_list::model::item::Item")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.state.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();
                    let result = self.state.create(id, params, &context);
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.state.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    self.publish(result.is_ok());
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.state.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.state.update(&id, update, &context);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    self.publish(result.is_ok());
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.state.delete(&id, &context).map(|_| ());
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.state.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    self.publish(result.is_ok());
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.state.action(&id, action, &context);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    self.publish(result.is_ok());
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
                ResourceRequest::ClearError { respond_to } => {
                    debug!(entity_type, "ClearError");
                    self.state.clear_error();
                    self.publish(false);
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::DismissError {
                    error_revision,
                    respond_to,
                } => {
                    let cleared = self.state.dismiss_error(error_revision);
                    debug!(entity_type, error_revision, cleared, "DismissError");
                    if cleared {
                        self.publish(false);
                    }
                    let _ = respond_to.send(Ok(cleared));
                }
                ResourceRequest::SetLoading {
                    loading,
                    respond_to,
                } => {
                    debug!(entity_type, loading, "SetLoading");
                    self.state.set_loading(loading);
                    self.publish(false);
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.state.len(), "Shutdown");
    }

    fn publish(&self, committed: bool) {
        if committed {
            self.commits.send_replace(self.state.items().to_vec());
        }
        self.snapshots.send_replace(self.state.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::FrameworkError;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    #[derive(Debug)]
    struct NoteCreate(String);

    #[derive(Debug)]
    struct NoteUpdate(String);

    #[derive(Debug, thiserror::Error)]
    #[error("Note text cannot be empty")]
    struct NoteError;

    impl ActorEntity for Note {
        type Id = u32;
        type Create = NoteCreate;
        type Update = NoteUpdate;
        type Action = ();
        type ActionResult = usize;
        type Context = ();
        type Error = NoteError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: NoteCreate, _: &()) -> Result<Self, NoteError> {
            if params.0.is_empty() {
                return Err(NoteError);
            }
            Ok(Self { id, text: params.0 })
        }

        fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), NoteError> {
            self.text = update.0;
            Ok(())
        }

        fn handle_action(&mut self, _: (), _: &()) -> Result<usize, NoteError> {
            Ok(self.text.len())
        }
    }

    fn spawn_notes() -> (ResourceClient<Note>, watch::Receiver<Vec<Note>>) {
        let counter = Arc::new(AtomicU32::new(1));
        let (actor, client) =
            ResourceActor::<Note>::new(10, move || counter.fetch_add(1, Ordering::SeqCst));
        let commits = actor.subscribe_commits();
        tokio::spawn(actor.run(()));
        (client, commits)
    }

    #[tokio::test]
    async fn test_resource_actor_full_lifecycle() {
        let (client, _commits) = spawn_notes();

        let id = client.create(NoteCreate("milk".into())).await.unwrap();
        assert_eq!(id, 1);

        let updated = client.update(id, NoteUpdate("oat milk".into())).await.unwrap();
        assert_eq!(updated.text, "oat milk");

        let len = client.perform_action(id, ()).await.unwrap();
        assert_eq!(len, 8);

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_commits_published_only_on_success() {
        let (client, mut commits) = spawn_notes();

        client.create(NoteCreate("bread".into())).await.unwrap();
        assert!(commits.has_changed().unwrap());
        let committed = commits.borrow_and_update().clone();
        assert_eq!(committed.len(), 1);

        let err = client.create(NoteCreate(String::new())).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
        assert!(!commits.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_snapshots_track_error_slot() {
        let (client, _commits) = spawn_notes();
        let mut snapshots = client.subscribe();

        let _ = client.create(NoteCreate(String::new())).await;
        assert_eq!(
            snapshots.borrow_and_update().error.as_deref(),
            Some("Note text cannot be empty")
        );

        client.clear_error().await.unwrap();
        assert_eq!(client.snapshot().await.unwrap().error, None);

        client.set_loading(true).await.unwrap();
        assert!(snapshots.borrow_and_update().loading);
    }

    #[tokio::test]
    async fn test_dismiss_error_skips_newer_failure() {
        let (client, _commits) = spawn_notes();
        let mut snapshots = client.subscribe();

        let _ = client.create(NoteCreate(String::new())).await;
        let first = snapshots.borrow_and_update().error_revision.unwrap();
        let _ = client.create(NoteCreate(String::new())).await;

        assert!(!client.dismiss_error(first).await.unwrap());
        let second = client.snapshot().await.unwrap();
        assert_eq!(second.error.as_deref(), Some("Note text cannot be empty"));

        assert!(client.dismiss_error(second.error_revision.unwrap()).await.unwrap());
        assert_eq!(client.snapshot().await.unwrap().error, None);
    }

    #[tokio::test]
    async fn test_seeded_actor_serves_existing_items() {
        let seeded = vec![Note { id: 10, text: "eggs".into() }];
        let (actor, client) = ResourceActor::with_items(4, seeded, || 11);
        tokio::spawn(actor.run(()));

        let note = client.get(10).await.unwrap().unwrap();
        assert_eq!(note.text, "eggs");
        assert_eq!(client.create(NoteCreate("jam".into())).await.unwrap(), 11);
        assert_eq!(client.snapshot().await.unwrap().items.len(), 2);
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Note>::new(1, || 1);
        drop(actor);

        let result = client.get(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
    }
}
