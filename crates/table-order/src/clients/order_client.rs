//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and exposes domain‑specific methods.
use crate::model::{Order, OrderDraft, OrderFilter, OrderId, TableId};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, draft), fields(table = %draft.table_num))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(draft).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, "Order placed");
        Ok(order)
    }

    /// Orders newest first, optionally for one table only.
    ///
    /// Orders with the same `order_time` come out most recently created first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, table: Option<TableId>) -> Result<Vec<Order>, OrderError> {
        let filter = table.map(|table| OrderFilter { table });
        let mut orders = self.list(filter).await?;
        orders.reverse();
        orders.sort_by(|a, b| b.order_time.cmp(&a.order_time));
        Ok(orders)
    }

    /// Overwrites the feedback on an existing order and returns the updated order.
    #[instrument(skip(self, feedback))]
    pub async fn attach_feedback(
        &self,
        id: OrderId,
        feedback: String,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id.clone(), OrderAction::AttachFeedback(feedback))
            .await
        {
            Ok(order) => Ok(order),
            Err(FrameworkError::NotFound(_)) => Err(OrderError::NotFound(id.to_string())),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
