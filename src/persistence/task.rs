use super::record::Persistor;
use crate::model::Item;
use crate::notify::NotificationBridge;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Mirrors every committed item list into storage.
///
/// Saves run one at a time in this task. Commits that land while a save is in flight
/// collapse into the newest one, so storage always converges on the latest list. A failed
/// save is reported as an info notification; the in-memory list is kept and the next
/// successful save corrects storage.
///
/// Reports never wait on the notification channel. If nobody drains it, they are dropped
/// and saving carries on.
///
/// The task ends once the actor is gone, after saving any commit it had not yet seen.
pub fn spawn_persist_task(
    persistor: Persistor,
    mut commits: watch::Receiver<Vec<Item>>,
    bridge: NotificationBridge,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Persist task started");
        let mut saves = 0u64;

        while commits.changed().await.is_ok() {
            let items = commits.borrow_and_update().clone();
            match persistor.save(&items).await {
                Ok(()) => saves += 1,
                Err(e) => {
                    warn!(error = %e, count = items.len(), "Save failed");
                    bridge.try_info(format!("Your list could not be saved: {e}"));
                }
            }
        }
        info!(saves, "Persist task stopped");
    })
}
