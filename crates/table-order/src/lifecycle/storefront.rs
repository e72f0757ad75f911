use crate::api::AppState;
use crate::checkout::LocalBackend;
use crate::clients::{OrderClient, TableClient};
use crate::config::Config;
use crate::model::{Order, TableLock};
use crate::storage::{self, JsonFileSink, StorageError, ORDERS_FILE, TABLES_FILE};
use crate::{order_actor, table_actor};
use std::path::Path;
use tracing::{error, info};

/// The running storefront: the table registry and the order store.
///
/// # Example
///
/// ```ignore
/// let system = Storefront::in_memory(32);
///
/// let table = TableId::parse("T1")?;
/// system.table_client.lock(&table).await?;
///
/// system.shutdown().await?;
/// ```
pub struct Storefront {
    /// Client for the table lock registry
    pub table_client: TableClient,

    /// Client for the order store
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Starts empty stores that live only in memory.
    pub fn in_memory(buffer_size: usize) -> Self {
        Self::spawn(buffer_size, Vec::new(), Vec::new(), None)
    }

    /// Starts the stores described by `config`, restoring snapshots from
    /// `storage.data_dir` when it is set.
    pub async fn start(config: &Config) -> Result<Self, StorageError> {
        let buffer_size = config.server.channel_capacity.get();
        let Some(dir) = config.storage.data_dir.as_deref() else {
            info!("No data directory configured, state is kept in memory only");
            return Ok(Self::in_memory(buffer_size));
        };

        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| StorageError::io(dir, e))?;
        let tables: Vec<TableLock> = storage::load_snapshot(&dir.join(TABLES_FILE)).await?;
        let orders: Vec<Order> = storage::load_snapshot(&dir.join(ORDERS_FILE)).await?;
        if let Some(order) = orders.iter().find(|o| o.id.millis() == Some(u64::MAX)) {
            return Err(StorageError::OrderIdsExhausted {
                path: dir.join(ORDERS_FILE),
                id: order.id.to_string(),
            });
        }
        info!(
            data_dir = %dir.display(),
            locked_tables = tables.len(),
            orders = orders.len(),
            "State restored"
        );

        Ok(Self::spawn(buffer_size, tables, orders, Some(dir)))
    }

    fn spawn(
        buffer_size: usize,
        tables: Vec<TableLock>,
        orders: Vec<Order>,
        data_dir: Option<&Path>,
    ) -> Self {
        // 1. Create actors
        let (table_actor, table_client) = table_actor::new(buffer_size, tables);
        let (order_actor, order_client) = order_actor::new(buffer_size, orders);

        // 2. Attach snapshot sinks
        let (table_actor, order_actor) = match data_dir {
            Some(dir) => (
                table_actor.with_sink(JsonFileSink::new(dir.join(TABLES_FILE))),
                order_actor.with_sink(JsonFileSink::new(dir.join(ORDERS_FILE))),
            ),
            None => (table_actor, order_actor),
        };

        // 3. Start actors; neither has dependencies (Context = ())
        let table_handle = tokio::spawn(table_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        Self {
            table_client,
            order_client,
            handles: vec![table_handle, order_handle],
        }
    }

    /// State for [`crate::api::router`].
    pub fn app_state(&self) -> AppState {
        AppState {
            tables: self.table_client.clone(),
            orders: self.order_client.clone(),
        }
    }

    /// An in-process backend for a [`CheckoutCoordinator`](crate::checkout::CheckoutCoordinator).
    pub fn backend(&self) -> LocalBackend {
        LocalBackend::new(self.table_client.clone(), self.order_client.clone())
    }

    /// Gracefully shuts down the stores.
    ///
    /// Drops this storefront's clients and waits for both actors to finish.
    /// Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.table_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
