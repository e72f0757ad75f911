//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the storefront's actors.
//!
//! ## The Storefront Pattern
//!
//! [`Storefront`] is the conductor: it restores persisted state, creates one
//! actor per store, spawns them and hands out clients. Stores are never global;
//! every test builds its own `Storefront`.
//!
//! ```rust,ignore
//! let system = Storefront::start(&config).await?;
//!
//! let app = api::router(system.app_state());
//! // ... serve ...
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors finish** - the last snapshot has already been written by then
//! 4. **Await completion** - wait for all actor tasks
//!
//! Every clone counts: an HTTP router or a checkout backend still holding a
//! client keeps its actor alive, so drop those before calling
//! [`Storefront::shutdown`].
//!
//! ## Persistence
//!
//! With `storage.data_dir` set, each actor is seeded from its snapshot file on
//! start and writes a new snapshot after every change (see [`crate::storage`]).

pub mod storefront;

pub use storefront::*;
