//! Demo: runs a short shopping trip against the real store and prints the notifications
//! a UI would show.
//!
//! Storage goes to `storage_dir` from the config file, so the list survives between runs.

use shopping_list::config::AppConfig;
use shopping_list::framework::{setup_tracing, ActorClient};
use shopping_list::lifecycle::ShoppingListSystem;
use shopping_list::model::ItemUpdate;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::load().map_err(|e| e.to_string())?;
    info!(storage_dir = %config.storage_dir.display(), "Starting shopping list");

    let (system, mut notifications) = ShoppingListSystem::open(&config).await;
    let client = &system.item_client;

    let restored = client.items().await.map_err(|e| e.to_string())?;
    info!(count = restored.len(), "Loaded list");

    let span = tracing::info_span!("shopping_trip");
    let trip = async {
        let eggs = client.add_item("Eggs", 12).await?;
        system.notifications.success("Eggs added").await;

        let bread = client.add_item(" Bread ", 1).await?;
        system.notifications.success("Bread added").await;

        client.toggle_purchased(eggs.clone()).await?;

        // Rejected: reported through the error slot, list unchanged.
        if let Err(e) = client.add_item("", 3).await {
            info!(error = %e, "Add rejected");
        }

        client
            .update_item(bread.clone(), ItemUpdate::default().quantity(2))
            .await?;
        client.delete(eggs).await?;
        system.notifications.success("Eggs removed").await;

        Ok::<_, shopping_list::item_actor::ItemError>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = trip {
        error!(error = %e, "Shopping trip failed");
    }

    // Let the error watcher report and clear the rejected add.
    tokio::time::sleep(config.error_clear_delay() * 2).await;

    for item in client.items().await.map_err(|e| e.to_string())? {
        info!(
            name = %item.name,
            quantity = item.quantity,
            purchased = item.purchased,
            "Item"
        );
    }

    system.shutdown().await?;

    while let Ok(notification) = notifications.try_recv() {
        info!(title = %notification.title, message = %notification.message, "Notification");
    }

    info!("Application completed successfully");
    Ok(())
}
