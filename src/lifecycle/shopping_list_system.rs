use crate::clients::ItemClient;
use crate::clock::{SharedClock, SystemClock};
use crate::config::AppConfig;
use crate::item_actor;
use crate::notify::{watch_errors, Notification, NotificationBridge};
use crate::persistence::{spawn_persist_task, FileStorage, KeyValueStorage, Persistor};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The runtime orchestrator for the shopping list.
///
/// `ShoppingListSystem` is responsible for:
/// - **Startup order**: restoring saved items before the store accepts any request
/// - **Wiring**: connecting the store's commit channel to the persist task and its
///   snapshots to the error watcher
/// - **Shutdown**: stopping every task so the last commit reaches storage
///
/// # Example
///
/// ```ignore
/// let (system, mut notifications) = ShoppingListSystem::open(&AppConfig::load()?).await;
///
/// let id = system.item_client.add_item("Eggs", 12).await?;
/// system.item_client.toggle_purchased(id).await?;
/// system.notifications.success("Item added").await;
///
/// system.shutdown().await?;
/// ```
pub struct ShoppingListSystem {
    /// Client for the item store.
    pub item_client: ItemClient,

    /// Sender for explicit success/error/info signals.
    pub notifications: NotificationBridge,

    actor_handle: JoinHandle<()>,
    persist_handle: JoinHandle<()>,
    watcher_handle: JoinHandle<()>,
}

impl ShoppingListSystem {
    /// Starts the system on top of the given storage and clock.
    ///
    /// 1. Loads persisted items (empty on any problem)
    /// 2. Builds the item actor seeded with them
    /// 3. Spawns the actor, the persist task and the error watcher
    ///
    /// Returns the system and the receiving end of the notification channel.
    pub async fn start(
        storage: Arc<dyn KeyValueStorage>,
        clock: SharedClock,
        config: &AppConfig,
    ) -> (Self, mpsc::Receiver<Notification>) {
        let persistor = Persistor::new(storage);
        let items = persistor.load().await;

        let (bridge, receiver) = NotificationBridge::new(
            config.channel_buffer,
            config.toast_duration(),
            config.error_clear_delay(),
        );

        let (actor, item_client) = item_actor::new(config.channel_buffer, items);
        let commits = actor.subscribe_commits();

        let actor_handle = tokio::spawn(actor.run(clock));
        let persist_handle = spawn_persist_task(persistor, commits, bridge.clone());
        let watcher_handle = watch_errors(bridge.clone(), item_client.clone());

        info!("Shopping list system started");
        let system = Self {
            item_client,
            notifications: bridge,
            actor_handle,
            persist_handle,
            watcher_handle,
        };
        (system, receiver)
    }

    /// Starts the system with file storage under `config.storage_dir` and the wall clock.
    pub async fn open(config: &AppConfig) -> (Self, mpsc::Receiver<Notification>) {
        let storage = Arc::new(FileStorage::new(config.storage_dir.clone()));
        info!(dir = %storage.dir().display(), "Using file storage");
        Self::start(storage, Arc::new(SystemClock), config).await
    }

    /// Gracefully shuts down the system.
    ///
    /// 1. Stops the error watcher, which holds a client clone
    /// 2. Drops the client, closing the actor's request channel
    /// 3. Waits for the actor, then for the persist task to save the final commit
    ///
    /// Returns an error if any task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        self.watcher_handle.abort();
        if let Err(e) = self.watcher_handle.await {
            if !e.is_cancelled() {
                error!("Error watcher failed: {:?}", e);
                return Err(format!("Error watcher failed: {:?}", e));
            }
        }

        // Last sender gone: the actor drains its queue and exits, which closes the
        // commit channel and lets the persist task finish.
        drop(self.item_client);

        for (name, handle) in [("Item actor", self.actor_handle), ("Persist task", self.persist_handle)] {
            if let Err(e) = handle.await {
                error!("{} failed: {:?}", name, e);
                return Err(format!("{} failed: {:?}", name, e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
