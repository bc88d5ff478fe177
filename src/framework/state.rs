//! # Resource State
//!
//! The pure state container behind every [`ResourceActor`](crate::framework::ResourceActor).
//!
//! `ResourceState<T>` holds the ordered entity sequence, the transient `error` slot,
//! the `loading` flag, and a revision counter. Each transition is atomic: it is fully
//! applied or fully rejected. A rejected transition leaves `items` untouched and records
//! the failure message in `error`; a committed one clears `error`.
//!
//! Every failure is stamped with the revision that recorded it (`error_revision`), so an
//! observer can tell two failures with the same message apart and clear only the one it
//! has seen.
//!
//! Nothing in here performs I/O or talks to a channel. The actor decides what to
//! publish after each call.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;

/// A read-only copy of the store, handed to observers and to the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot<T> {
    /// Entities in insertion order.
    pub items: Vec<T>,
    /// Message of the last failed operation, until cleared.
    pub error: Option<String>,
    /// Revision at which `error` was recorded. `Some` exactly when `error` is.
    pub error_revision: Option<u64>,
    /// Transient, informational flag.
    pub loading: bool,
    /// Bumped on every state change.
    pub revision: u64,
}

impl<T> Default for StoreSnapshot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            error_revision: None,
            loading: false,
            revision: 0,
        }
    }
}

/// Ordered entity store with an error slot.
#[derive(Debug, Clone)]
pub struct ResourceState<T: ActorEntity> {
    items: Vec<T>,
    error: Option<String>,
    error_revision: Option<u64>,
    loading: bool,
    revision: u64,
}

impl<T: ActorEntity> Default for ResourceState<T> {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}

impl<T: ActorEntity> ResourceState<T> {
    /// Creates a state seeded with previously persisted entities.
    ///
    /// `error` and `loading` always start cleared, whatever they were before.
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items,
            error: None,
            error_revision: None,
            loading: false,
            revision: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn error_revision(&self) -> Option<u64> {
        self.error_revision
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn snapshot(&self) -> StoreSnapshot<T> {
        StoreSnapshot {
            items: self.items.clone(),
            error: self.error.clone(),
            error_revision: self.error_revision,
            loading: self.loading,
            revision: self.revision,
        }
    }

    /// Builds a new entity under `id` and appends it.
    pub fn create(
        &mut self,
        id: T::Id,
        params: T::Create,
        ctx: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        if self.position(&id).is_some() {
            return self.fail(FrameworkError::DuplicateId(id.to_string()));
        }
        match T::from_create_params(id.clone(), params, ctx) {
            Ok(item) => {
                self.items.push(item);
                self.commit();
                Ok(id)
            }
            Err(e) => self.fail(FrameworkError::EntityError(Box::new(e))),
        }
    }

    /// Applies `update` to the entity with `id`, in place.
    ///
    /// The hook runs against a draft; the stored entity is replaced only on success.
    pub fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        ctx: &T::Context,
    ) -> Result<T, FrameworkError> {
        let Some(index) = self.position(id) else {
            return self.fail(FrameworkError::NotFound(id.to_string()));
        };
        let mut draft = self.items[index].clone();
        if let Err(e) = draft.on_update(update, ctx) {
            return self.fail(FrameworkError::EntityError(Box::new(e)));
        }
        self.items[index] = draft.clone();
        self.commit();
        Ok(draft)
    }

    /// Removes the entity with `id`, keeping the order of the rest.
    pub fn delete(&mut self, id: &T::Id, ctx: &T::Context) -> Result<T, FrameworkError> {
        let Some(index) = self.position(id) else {
            return self.fail(FrameworkError::NotFound(id.to_string()));
        };
        if let Err(e) = self.items[index].on_delete(ctx) {
            return self.fail(FrameworkError::EntityError(Box::new(e)));
        }
        let removed = self.items.remove(index);
        self.commit();
        Ok(removed)
    }

    /// Runs a custom action against the entity with `id`. Same draft rule as `update`.
    pub fn action(
        &mut self,
        id: &T::Id,
        action: T::Action,
        ctx: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let Some(index) = self.position(id) else {
            return self.fail(FrameworkError::NotFound(id.to_string()));
        };
        let mut draft = self.items[index].clone();
        match draft.handle_action(action, ctx) {
            Ok(result) => {
                self.items[index] = draft;
                self.commit();
                Ok(result)
            }
            Err(e) => self.fail(FrameworkError::EntityError(Box::new(e))),
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_revision = None;
        self.revision += 1;
    }

    /// Clears the error only if it is still the one recorded at `error_revision`.
    ///
    /// Returns whether the slot was cleared. A later failure, or an empty slot, is left
    /// alone and the revision does not move.
    pub fn dismiss_error(&mut self, error_revision: u64) -> bool {
        if self.error_revision != Some(error_revision) {
            return false;
        }
        self.clear_error();
        true
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.revision += 1;
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn commit(&mut self) {
        self.error = None;
        self.error_revision = None;
        self.revision += 1;
    }

    fn fail<R>(&mut self, error: FrameworkError) -> Result<R, FrameworkError> {
        self.revision += 1;
        self.error = Some(error.to_string());
        self.error_revision = Some(self.revision);
        Err(error)
    }
}
