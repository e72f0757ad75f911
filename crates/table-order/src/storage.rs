//! JSON snapshot files.
//!
//! Each store is written to its own file as a JSON array, in arrival order,
//! after every mutation. The new content goes to a sibling `.tmp` file first
//! and is then renamed over the old one, so a crash mid-write leaves the
//! previous snapshot intact.

use actor_framework::{SnapshotError, SnapshotSink};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const TABLES_FILE: &str = "tables.json";
pub const ORDERS_FILE: &str = "orders.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Order id {id} in {path} leaves no room for new order ids")]
    OrderIdsExhausted { path: PathBuf, id: String },
}

impl StorageError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reads a snapshot written by [`JsonFileSink`]. A missing file is an empty store.
pub async fn load_snapshot<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No snapshot, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(StorageError::io(path, e)),
    };

    let items: Vec<T> = serde_json::from_slice(&bytes).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), count = items.len(), "Snapshot loaded");
    Ok(items)
}

/// Writes a store's snapshot to one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn write(&self, bytes: &[u8]) -> Result<(), StorageError> {
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| StorageError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::io(&self.path, e))
    }
}

#[async_trait]
impl<T: Serialize + Sync + 'static> SnapshotSink<T> for JsonFileSink {
    async fn persist(&self, items: &[T]) -> Result<(), SnapshotError> {
        let bytes = serde_json::to_vec_pretty(items)?;
        self.write(&bytes).await?;
        debug!(path = %self.path.display(), count = items.len(), "Snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TableId, TableLock};
    use chrono::Utc;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let items: Vec<TableLock> = load_snapshot(&dir.path().join(TABLES_FILE)).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TABLES_FILE);
        let sink = JsonFileSink::new(&path);
        let locks = vec![TableLock {
            table: TableId::parse("T4").unwrap(),
            locked_at: Utc::now(),
        }];

        SnapshotSink::<TableLock>::persist(&sink, &locks).await.unwrap();

        let loaded: Vec<TableLock> = load_snapshot(&path).await.unwrap();
        assert_eq!(loaded, locks);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ORDERS_FILE);
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let result = load_snapshot::<TableLock>(&path).await;
        assert!(matches!(result, Err(StorageError::Json { .. })));
    }
}
