//! # Table Actor
//!
//! This module implements the table lock registry as a resource actor.
//!
//! ## Overview
//!
//! A table is locked when a [`TableLock`] keyed by its number exists and free
//! otherwise. Locking is a natural-key create: the actor checks for the key and
//! inserts in one message, so of any number of concurrent lock requests for a
//! free table exactly one succeeds. Releasing is a delete that tolerates a
//! missing key.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`TableLock`]
//! - [`error`] - [`TableError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use table_order::model::TableId;
//! use table_order::table_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = table_actor::new(32, Vec::new());
//!     tokio::spawn(actor.run(()));
//!
//!     let table = TableId::parse("T3")?;
//!     assert!(client.lock(&table).await?);
//!     assert!(!client.lock(&table).await?);
//!     client.release(&table).await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::TableClient;
use crate::model::{TableLock, TableLockCreate};
use actor_framework::ResourceActor;

/// Creates a new Table actor and its client, restoring `seed` as the locked set.
pub fn new(buffer_size: usize, seed: Vec<TableLock>) -> (ResourceActor<TableLock>, TableClient) {
    let (actor, generic_client) =
        ResourceActor::<TableLock>::new(buffer_size, |params: &TableLockCreate| params.table.clone());
    let client = TableClient::new(generic_client);

    (actor.with_seed(seed), client)
}
