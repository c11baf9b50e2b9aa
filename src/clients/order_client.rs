use crate::framework::ResourceClient;
use crate::model::{MenuItem, Order, OrderAction, OrderActionResult, OrderCreate, OrderSummary};
use crate::order_actor::OrderError;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// Wraps the generic [`ResourceClient`] so the rest of the app never touches
/// raw message passing, and maps framework errors to [`OrderError`].
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Opens a fresh, empty order and returns its id.
    #[instrument(skip(self))]
    pub async fn open(&self) -> Result<String, OrderError> {
        debug!("Sending open to actor");
        self.inner
            .create(OrderCreate {})
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))
    }

    /// Appends an item to the order; returns the item count after appending.
    #[instrument(skip(self, item), fields(item = item.label()))]
    pub async fn add_item(&self, id: String, item: MenuItem) -> Result<usize, OrderError> {
        debug!(?item, "Sending add_item to actor");
        match self
            .inner
            .perform_action(id, OrderAction::AddItem(item))
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
        {
            OrderActionResult::Added { count } => Ok(count),
            other => Err(OrderError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    /// Fetches the current item count and running total.
    #[instrument(skip(self))]
    pub async fn summary(&self, id: String) -> Result<OrderSummary, OrderError> {
        debug!("Sending summary to actor");
        match self
            .inner
            .perform_action(id, OrderAction::Summary)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
        {
            OrderActionResult::Summary(summary) => Ok(summary),
            other => Err(OrderError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    /// Fetches the full order by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: String) -> Result<Option<Order>, OrderError> {
        debug!("Sending get to actor");
        self.inner
            .get(id)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::MenuItemKind;

    #[tokio::test]
    async fn add_item_unwraps_the_added_count() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok("order_1".to_string());
        mock.expect_action("order_1".to_string())
            .return_ok(OrderActionResult::Added { count: 1 });

        let client = OrderClient::new(mock.client());
        let id = client.open().await.unwrap();
        let count = client
            .add_item(id, MenuItem::new(MenuItemKind::Pasta))
            .await
            .unwrap();
        assert_eq!(count, 1);

        mock.verify();
    }

    #[tokio::test]
    async fn framework_errors_map_to_order_errors() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action("order_1".to_string())
            .return_err(FrameworkError::NotFound("order_1".to_string()));

        let client = OrderClient::new(mock.client());
        let err = client.summary("order_1".to_string()).await.unwrap_err();
        assert!(matches!(err, OrderError::ActorCommunicationError(_)));

        mock.verify();
    }
}
