use crate::clients::OrderClient;
use crate::kitchen::{Chef, KitchenNotifier};
use tracing::{error, info};

/// The runtime orchestrator for the ordering demo.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the order actor
/// - **Dependency Wiring**: Attaching the kitchen's [`Chef`] to the
///   [`KitchenNotifier`] and injecting the notifier as the actor's context
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let order_id = system.order_client.open().await?;
/// system.order_client.add_item(order_id.clone(), item).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Creates and initializes a new `OrderSystem` with the order actor running.
    ///
    /// The kitchen notifier (with the chef attached) is injected as the order
    /// actor's context. Nothing in the interactive flow triggers it; see
    /// [`crate::kitchen`].
    pub fn new() -> Self {
        let (order_actor, order_client) = crate::order_actor::new();

        let mut kitchen = KitchenNotifier::new();
        kitchen.attach(Box::new(Chef));

        let order_handle = tokio::spawn(order_actor.run(kitchen));

        Self {
            order_client,
            handles: vec![order_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes its channel; the actor detects the closed
    /// channel and exits its event loop. We then join every actor task and
    /// report any panic.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
