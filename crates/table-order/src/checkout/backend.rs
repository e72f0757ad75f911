use crate::checkout::CheckoutError;
use crate::clients::{OrderClient, TableClient};
use crate::model::{Order, OrderDraft, OrderId, TableId};
use async_trait::async_trait;

/// The operations a checkout needs from the stores.
#[async_trait]
pub trait CheckoutBackend: Send + Sync {
    /// `Ok(false)` when the table is already locked.
    async fn lock_table(&self, table: &TableId) -> Result<bool, CheckoutError>;

    async fn release_table(&self, table: &TableId) -> Result<(), CheckoutError>;

    async fn submit_order(&self, draft: OrderDraft) -> Result<Order, CheckoutError>;

    async fn leave_feedback(&self, order: &OrderId, feedback: &str)
        -> Result<Order, CheckoutError>;
}

/// Talks to the actors directly. Used when the checkout runs in the same
/// process as the stores, and in tests.
#[derive(Clone)]
pub struct LocalBackend {
    tables: TableClient,
    orders: OrderClient,
}

impl LocalBackend {
    pub fn new(tables: TableClient, orders: OrderClient) -> Self {
        Self { tables, orders }
    }
}

#[async_trait]
impl CheckoutBackend for LocalBackend {
    async fn lock_table(&self, table: &TableId) -> Result<bool, CheckoutError> {
        Ok(self.tables.lock(table).await?)
    }

    async fn release_table(&self, table: &TableId) -> Result<(), CheckoutError> {
        Ok(self.tables.release(table).await?)
    }

    async fn submit_order(&self, draft: OrderDraft) -> Result<Order, CheckoutError> {
        Ok(self.orders.create_order(draft).await?)
    }

    async fn leave_feedback(
        &self,
        order: &OrderId,
        feedback: &str,
    ) -> Result<Order, CheckoutError> {
        Ok(self
            .orders
            .attach_feedback(order.clone(), feedback.to_string())
            .await?)
    }
}
