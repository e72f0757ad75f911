//! # Table Client
//!
//! High-level API for the table lock registry.
use crate::model::{TableId, TableLock, TableLockCreate};
use crate::table_actor::TableError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Table actor.
#[derive(Clone)]
pub struct TableClient {
    inner: ResourceClient<TableLock>,
}

impl TableClient {
    pub fn new(inner: ResourceClient<TableLock>) -> Self {
        Self { inner }
    }

    /// Tries to lock `table`. Returns `false` when it is already locked.
    #[instrument(skip(self))]
    pub async fn lock(&self, table: &TableId) -> Result<bool, TableError> {
        debug!("Sending request");
        let params = TableLockCreate {
            table: table.clone(),
        };
        match self.inner.create(params).await {
            Ok(_) => {
                info!(%table, "Table locked");
                Ok(true)
            }
            Err(FrameworkError::AlreadyExists(_)) => {
                info!(%table, "Table already locked");
                Ok(false)
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Unlocks `table`. Releasing a table that isn't locked is a no-op.
    #[instrument(skip(self))]
    pub async fn release(&self, table: &TableId) -> Result<(), TableError> {
        debug!("Sending request");
        match self.inner.delete(table.clone()).await {
            Ok(()) => {
                info!(%table, "Table released");
                Ok(())
            }
            Err(FrameworkError::NotFound(_)) => {
                debug!(%table, "Table was not locked");
                Ok(())
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Currently locked tables, in the order they were locked.
    pub async fn locked_tables(&self) -> Result<Vec<TableId>, TableError> {
        let locks = self.list(None).await?;
        Ok(locks.into_iter().map(|lock| lock.table).collect())
    }
}

#[async_trait]
impl ActorClient<TableLock> for TableClient {
    type Error = TableError;

    fn inner(&self) -> &ResourceClient<TableLock> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        TableError::ActorCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;
    use chrono::Utc;

    fn table(raw: &str) -> TableId {
        TableId::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_lock_reports_acquired() {
        let mut mock = MockClient::<TableLock>::new();
        mock.expect_create().return_ok(TableLock {
            table: table("T1"),
            locked_at: Utc::now(),
        });
        mock.expect_create()
            .return_err(FrameworkError::AlreadyExists("T1".to_string()));

        let client = TableClient::new(mock.client());
        assert!(client.lock(&table("T1")).await.unwrap());
        assert!(!client.lock(&table("T1")).await.unwrap());
        mock.verify();
    }

    #[tokio::test]
    async fn test_release_of_free_table_is_ok() {
        let mut mock = MockClient::<TableLock>::new();
        mock.expect_delete(table("T9"))
            .return_err(FrameworkError::NotFound("T9".to_string()));

        let client = TableClient::new(mock.client());
        assert!(client.release(&table("T9")).await.is_ok());
        mock.verify();
    }

    #[tokio::test]
    async fn test_actor_failure_is_surfaced() {
        let mut mock = MockClient::<TableLock>::new();
        mock.expect_create().return_err(FrameworkError::ActorClosed);
        mock.expect_delete(table("T1"))
            .return_err(FrameworkError::ActorClosed);

        let client = TableClient::new(mock.client());
        assert!(matches!(
            client.lock(&table("T1")).await,
            Err(TableError::ActorCommunicationError(_))
        ));
        assert!(matches!(
            client.release(&table("T1")).await,
            Err(TableError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_locked_tables_lists_ids() {
        let mut mock = MockClient::<TableLock>::new();
        let now = Utc::now();
        mock.expect_list().return_ok(vec![
            TableLock {
                table: table("T2"),
                locked_at: now,
            },
            TableLock {
                table: table("T1"),
                locked_at: now,
            },
        ]);

        let client = TableClient::new(mock.client());
        assert_eq!(
            client.locked_tables().await.unwrap(),
            vec![table("T2"), table("T1")]
        );
    }
}
