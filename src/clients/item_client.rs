//! # Item Client
//!
//! Provides a high-level API for interacting with the `Item` actor.
//! It wraps a `ResourceClient<Item>` and exposes the shopping-list operations.
use crate::framework::{ActorClient, FrameworkError, ResourceClient, StoreSnapshot};
use crate::item_actor::{ItemAction, ItemActionResult, ItemError};
use crate::model::{Item, ItemId, ItemUpdate, NewItem};
use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, instrument};

/// Client for interacting with the Item actor.
#[derive(Clone)]
pub struct ItemClient {
    inner: ResourceClient<Item>,
}

impl ItemClient {
    pub fn new(inner: ResourceClient<Item>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Item> for ItemClient {
    type Error = ItemError;

    fn inner(&self) -> &ResourceClient<Item> {
        &self.inner
    }

    /// Recovers the entity's own error where there is one, so callers can match on it.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ItemError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ItemError>() {
                Ok(item_error) => *item_error,
                Err(other) => ItemError::ActorCommunicationError(other.to_string()),
            },
            other => ItemError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ItemClient {
    /// Add a new item. Returns the generated id.
    #[instrument(skip(self))]
    pub async fn add_item(&self, name: &str, quantity: i64) -> Result<ItemId, ItemError> {
        debug!("Sending request");
        self.inner
            .create(NewItem::new(name, quantity))
            .await
            .map_err(Self::map_error)
    }

    /// Apply a partial update. Returns the item as stored afterwards.
    #[instrument(skip(self))]
    pub async fn update_item(&self, id: ItemId, update: ItemUpdate) -> Result<Item, ItemError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(Self::map_error)
    }

    /// Flip the purchased flag.
    ///
    /// Returns the new value of `purchased`.
    #[instrument(skip(self))]
    pub async fn toggle_purchased(&self, id: ItemId) -> Result<bool, ItemError> {
        debug!("Toggling purchased for item {}", id);
        match self
            .inner
            .perform_action(id, ItemAction::TogglePurchased)
            .await
        {
            Ok(ItemActionResult::TogglePurchased(purchased)) => Ok(purchased),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_loading(&self, loading: bool) -> Result<(), ItemError> {
        self.inner
            .set_loading(loading)
            .await
            .map_err(Self::map_error)
    }

    /// Watch every state change of the store, failures included.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot<Item>> {
        self.inner.subscribe()
    }

    /// The items as they stand, in insertion order.
    pub async fn items(&self) -> Result<Vec<Item>, ItemError> {
        Ok(self.snapshot().await?.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_create, expect_update};
    use crate::validation::ValidationError;

    #[tokio::test]
    async fn test_add_item_sends_payload() {
        let (client, mut receiver) = create_mock_client::<Item>(10);
        let item_client = ItemClient::new(client);

        let add_task = tokio::spawn(async move { item_client.add_item("Eggs", 12).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");

        assert_eq!(params.name, "Eggs");
        assert_eq!(params.quantity, 12);

        responder.send(Ok(ItemId::from("item_1"))).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result.unwrap(), ItemId::from("item_1"));
    }

    #[tokio::test]
    async fn test_add_item_surfaces_validation_error() {
        let (client, mut receiver) = create_mock_client::<Item>(10);
        let item_client = ItemClient::new(client);

        let add_task = tokio::spawn(async move { item_client.add_item("", 1).await });

        let (_, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(ItemError::from(
                ValidationError::EmptyName,
            )))))
            .unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(
            result.unwrap_err(),
            ItemError::Validation(ValidationError::EmptyName)
        );
    }

    #[tokio::test]
    async fn test_update_item_maps_not_found() {
        let (client, mut receiver) = create_mock_client::<Item>(10);
        let item_client = ItemClient::new(client);

        let update_task = tokio::spawn(async move {
            item_client
                .update_item(ItemId::from("gone"), ItemUpdate::default().quantity(3))
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");

        assert_eq!(id, ItemId::from("gone"));
        assert_eq!(update.quantity, Some(3));
        assert_eq!(update.name, None);

        responder
            .send(Err(FrameworkError::NotFound("gone".to_string())))
            .unwrap();

        let result = update_task.await.unwrap();
        assert_eq!(result.unwrap_err(), ItemError::NotFound("gone".to_string()));
    }

    #[tokio::test]
    async fn test_toggle_purchased_returns_new_value() {
        let (client, mut receiver) = create_mock_client::<Item>(10);
        let item_client = ItemClient::new(client);

        let toggle_task =
            tokio::spawn(async move { item_client.toggle_purchased(ItemId::from("a")).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, ItemId::from("a"));
        assert_eq!(action, ItemAction::TogglePurchased);

        responder
            .send(Ok(ItemActionResult::TogglePurchased(true)))
            .unwrap();

        assert!(toggle_task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Item>(10);
        let item_client = ItemClient::new(client);
        drop(receiver);

        let result = item_client.add_item("Eggs", 1).await;

        assert!(matches!(
            result,
            Err(ItemError::ActorCommunicationError(ref msg)) if msg == "Actor closed"
        ));
    }
}
