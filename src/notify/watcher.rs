use super::bridge::NotificationBridge;
use crate::clients::ItemClient;
use crate::framework::ActorClient;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Turns the store's error slot into notifications.
///
/// Every failure the watcher observes is reported once, identified by the revision that
/// recorded it rather than by its message, so a repeated failure with the same text is
/// still reported. After the bridge's clear delay the slot is dismissed, which only
/// clears it if it still holds that same failure.
///
/// A failure already in the slot when the task first runs counts as new. Failures that
/// replace each other before the watcher looks are reported as the latest one.
///
/// The task owns a client clone, which keeps the actor alive. Abort the handle before
/// waiting for the actor to stop.
pub fn watch_errors(bridge: NotificationBridge, client: ItemClient) -> JoinHandle<()> {
    let mut snapshots = client.subscribe();
    tokio::spawn(async move {
        info!("Error watcher started");
        let mut reported: Option<u64> = None;

        loop {
            let pending = {
                let snapshot = snapshots.borrow_and_update();
                match (&snapshot.error, snapshot.error_revision) {
                    (Some(message), Some(revision)) if reported != Some(revision) => {
                        Some((message.clone(), revision))
                    }
                    _ => None,
                }
            };

            if let Some((message, revision)) = pending {
                bridge.error(message).await;
                reported = Some(revision);

                tokio::time::sleep(bridge.clear_delay()).await;
                match client.dismiss_error(revision).await {
                    Ok(cleared) => debug!(revision, cleared, "Dismissed error"),
                    Err(e) => {
                        debug!(error = %e, "Could not clear error, store is gone");
                        break;
                    }
                }
                // The slot may have moved on while we slept.
                continue;
            }

            if snapshots.changed().await.is_err() {
                break;
            }
        }
        info!("Error watcher stopped");
    })
}
