//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent actor systems. It implements a
//! **Resource-Oriented Architecture (ROA)** pattern on top of the **Actor Model**:
//! every kind of stored resource gets one actor that owns it outright, and the
//! rest of the program talks to it through a cloneable client.
//!
//! ## Why ROA + Actor Model?
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - Standard operations (Create, Get, List, Update, Delete) on well-defined resources
//! - Predictable lifecycle hooks
//! - One uniform API surface across all resource types
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates race conditions
//!
//! The second point is what makes check-and-set operations safe. "Lock table 7
//! unless somebody already has" is a single `Create` message; the actor checks
//! for the key and inserts in one step, so of two concurrent requests exactly
//! one wins.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain models and their hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing, ids, ordering, snapshots
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket {
//!     id: u64,
//!     queue: String,
//! }
//!
//! #[derive(Debug)] struct TicketCreate { queue: String }
//! #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u64;
//!     type Create = TicketCreate;
//!     type Update = ();
//!     type Action = ();
//!     type ActionResult = ();
//!     type Filter = String;
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn id(&self) -> &u64 { &self.id }
//!
//!     fn from_create_params(id: u64, params: TicketCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, queue: params.queue })
//!     }
//!
//!     fn matches(&self, queue: &String) -> bool { &self.queue == queue }
//!
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut counter = 0;
//!     let (actor, client) = ResourceActor::<Ticket>::new(10, move |_: &TicketCreate| {
//!         counter += 1;
//!         counter
//!     });
//!     tokio::spawn(actor.run(()));
//!
//!     client.create(TicketCreate { queue: "kitchen".into() }).await.unwrap();
//!     client.create(TicketCreate { queue: "bar".into() }).await.unwrap();
//!
//!     let kitchen = client.list(Some("kitchen".into())).await.unwrap();
//!     assert_eq!(kitchen.len(), 1);
//!     assert!(matches!(client.delete(99).await, Err(FrameworkError::NotFound(_))));
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at
//! construction time, so actors can be created first and wired afterwards.
//!
//! ## Persistence
//!
//! A [`SnapshotSink`] attached with [`ResourceActor::with_sink`] receives the whole
//! store after each mutation; [`ResourceActor::with_seed`] restores it on start.
//!
//! ## Testing
//!
//! [`mock::MockClient`] hands out a real [`ResourceClient`] whose requests are
//! answered from scripted expectations, for fast deterministic tests of client
//! wrappers without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod snapshot;
pub mod tracing;

// Re-export core types for convenience
pub use actor::{IdGenerator, ResourceActor};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use snapshot::{SnapshotError, SnapshotSink};
