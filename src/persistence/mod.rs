//! # Persistence Adapter
//!
//! Keeps the item list across launches.
//!
//! - [`KeyValueStorage`] - async string key-value seam, with [`FileStorage`] and
//!   [`MemoryStorage`] backends
//! - [`Persistor`] - writes and restores the versioned record under [`ROOT_KEY`]
//! - [`spawn_persist_task`] - background task that saves every committed list
//!
//! Loading happens once, before the store starts. Saving is driven by the store's commit
//! channel and never holds up a mutation.

pub mod error;
pub mod file;
pub mod record;
pub mod storage;
pub mod task;

pub use error::PersistError;
pub use file::FileStorage;
pub use record::{Persistor, PERSIST_VERSION, ROOT_KEY};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use task::spawn_persist_task;
