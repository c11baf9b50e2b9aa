//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`Entity`] trait implementation that enables
//! [`Order`] to be managed by the generic [`crate::framework::ResourceActor`].
//!
//! The actor's context is the [`KitchenNotifier`]: it is wired in at startup so
//! hooks *could* notify the kitchen, but nothing in the interactive flow does.

use crate::framework::Entity;
use crate::kitchen::KitchenNotifier;
use crate::model::{Order, OrderAction, OrderActionResult, OrderCreate, OrderSummary};
use async_trait::async_trait;

#[async_trait]
impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = KitchenNotifier;

    /// Creates a new, empty Order.
    fn from_create_params(id: Self::Id, _params: OrderCreate) -> Result<Self, String> {
        Ok(Self::new(id))
    }

    /// Handles custom actions for the Order entity.
    ///
    /// # Actions
    /// - `AddItem`: appends the item, returns the new count
    /// - `Summary`: returns item count and running total
    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &KitchenNotifier,
    ) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::AddItem(item) => {
                self.items.push(item);
                Ok(OrderActionResult::Added {
                    count: self.item_count(),
                })
            }
            OrderAction::Summary => Ok(OrderActionResult::Summary(OrderSummary {
                item_count: self.item_count(),
                total: self.total(),
            })),
        }
    }
}
