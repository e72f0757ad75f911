//! ActorEntity trait implementation for the Order domain type.

use crate::model::{Order, OrderDraft, OrderFilter, OrderId};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderDraft;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Filter = OrderFilter;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// New orders always start out `completed`.
    fn from_create_params(id: OrderId, draft: OrderDraft) -> Result<Self, Self::Error> {
        Ok(Order::from_draft(id, draft))
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        self.table_num == filter.table
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::AttachFeedback(text) => {
                self.feedback = Some(text);
                Ok(self.clone())
            }
        }
    }
}
