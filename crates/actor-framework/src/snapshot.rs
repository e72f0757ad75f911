//! # Snapshot Sinks
//!
//! A [`SnapshotSink`] receives the complete contents of a `ResourceActor`'s store,
//! in arrival order, after every successful mutation. The actor owns its state,
//! so this is the single place persistence can hook in without a second copy of
//! the data or a lock around the store.
//!
//! Sink failures are logged by the actor and never undo the mutation that
//! triggered them.

use async_trait::async_trait;

/// Boxed error returned by sinks.
pub type SnapshotError = Box<dyn std::error::Error + Send + Sync>;

/// Receives full-store snapshots from a `ResourceActor`.
#[async_trait]
pub trait SnapshotSink<T>: Send + Sync {
    /// Persist `items`, which is the entire store in arrival order.
    async fn persist(&self, items: &[T]) -> Result<(), SnapshotError>;
}
