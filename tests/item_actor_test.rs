use chrono::{TimeDelta, TimeZone, Utc};
use shopping_list::clock::{Clock, ManualClock, SharedClock};
use shopping_list::framework::ActorClient;
use shopping_list::item_actor::{self, ItemError};
use shopping_list::model::{Item, ItemId, ItemUpdate};
use shopping_list::validation::ValidationError;
use std::sync::Arc;

fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
    ))
}

fn fixed_clock() -> SharedClock {
    manual_clock()
}

/// Real Item actor driven through its client, with a manual clock.
#[tokio::test]
async fn test_item_lifecycle_through_actor() {
    let clock = manual_clock();
    let (actor, client) = item_actor::new(16, Vec::new());
    let ctx: SharedClock = clock.clone();
    let actor_handle = tokio::spawn(actor.run(ctx));

    let id = client.add_item("  Milk ", 2).await.expect("add should succeed");
    let milk = client.get(id.clone()).await.unwrap().expect("item should exist");
    assert_eq!(milk.name, "Milk");
    assert!(!milk.purchased);
    assert_eq!(milk.created_at, clock.now());

    clock.advance(TimeDelta::minutes(1));
    let updated = client
        .update_item(id.clone(), ItemUpdate::default().quantity(3))
        .await
        .unwrap();
    assert_eq!(updated.quantity, 3);
    assert_eq!(updated.name, "Milk");
    assert_eq!(updated.updated_at - updated.created_at, TimeDelta::minutes(1));

    assert!(client.toggle_purchased(id.clone()).await.unwrap());
    assert!(!client.toggle_purchased(id.clone()).await.unwrap());

    client.delete(id.clone()).await.unwrap();
    assert_eq!(
        client.delete(id.clone()).await.unwrap_err(),
        ItemError::NotFound(id.to_string())
    );
    assert!(client.items().await.unwrap().is_empty());

    drop(client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_rejections_fill_error_slot_and_keep_items() {
    let (actor, client) = item_actor::new(16, Vec::new());
    let ctx: SharedClock = manual_clock();
    let actor_handle = tokio::spawn(actor.run(ctx));

    let id = client.add_item("Eggs", 12).await.unwrap();

    let err = client.add_item("   ", 1).await.unwrap_err();
    assert_eq!(err, ItemError::Validation(ValidationError::EmptyName));

    let err = client
        .update_item(id.clone(), ItemUpdate::default().name("").quantity(5))
        .await
        .unwrap_err();
    assert_eq!(err, ItemError::Validation(ValidationError::EmptyName));

    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.error.as_deref(), Some("Item name cannot be empty"));
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].name, "Eggs");
    assert_eq!(snapshot.items[0].quantity, 12);

    client.clear_error().await.unwrap();
    assert_eq!(client.snapshot().await.unwrap().error, None);

    let missing = ItemId::from("missing");
    let err = client
        .update_item(missing, ItemUpdate::default().name("x"))
        .await
        .unwrap_err();
    assert_eq!(err, ItemError::NotFound("missing".to_string()));
    assert_eq!(
        client.snapshot().await.unwrap().error.as_deref(),
        Some("Item not found: missing")
    );

    drop(client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_loading_flag_is_independent_of_items() {
    let (actor, client) = item_actor::new(16, Vec::new());
    let actor_handle = tokio::spawn(actor.run(fixed_clock()));

    client.set_loading(true).await.unwrap();
    let snapshot = client.snapshot().await.unwrap();
    assert!(snapshot.loading);
    assert!(snapshot.items.is_empty());

    client.set_loading(false).await.unwrap();
    assert!(!client.snapshot().await.unwrap().loading);

    drop(client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_seeded_actor_starts_clean() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let seeded = vec![Item {
        id: ItemId::from("a"),
        name: "Tea".to_string(),
        quantity: 1,
        purchased: true,
        created_at: at,
        updated_at: at,
    }];
    let (actor, client) = item_actor::new(16, seeded.clone());
    let actor_handle = tokio::spawn(actor.run(fixed_clock()));

    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.items, seeded);
    assert_eq!(snapshot.error, None);
    assert!(!snapshot.loading);

    drop(client);
    actor_handle.await.unwrap();
}

/// Concurrent callers are serialized by the actor: every add lands exactly once.
#[tokio::test]
async fn test_concurrent_adds_are_all_applied() {
    let (actor, client) = item_actor::new(4, Vec::new());
    let actor_handle = tokio::spawn(actor.run(fixed_clock()));

    let tasks: Vec<_> = (1..=20)
        .map(|n| {
            let client = client.clone();
            tokio::spawn(async move { client.add_item(&format!("item {n}"), n).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let items = client.items().await.unwrap();
    assert_eq!(items.len(), 20);
    let mut quantities: Vec<_> = items.iter().map(|i| i.quantity).collect();
    quantities.sort_unstable();
    assert_eq!(quantities, (1..=20).collect::<Vec<_>>());

    drop(client);
    actor_handle.await.unwrap();
}
