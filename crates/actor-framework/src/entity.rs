//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored resource (a table lock,
//! an order, …) implements to be managed by the generic `ResourceActor`. It names
//! the associated types for ids, payloads, actions, list filters, context and
//! errors, and provides lifecycle hooks (`on_create`, `on_update`, `on_delete`,
//! `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::matches`]
//!
//! The defaults do nothing (`Ok(())`) or accept everything (`true`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A value stored and served by a [`ResourceActor`](crate::ResourceActor).
///
/// # Ids
/// The actor does not invent ids on its own. It asks the generator passed to
/// [`ResourceActor::new`](crate::ResourceActor::new) for the id of every create
/// payload. A generator may derive the id from the payload itself (a natural key
/// such as a table number) or mint a fresh one (a time-based order id). Either
/// way the actor refuses to overwrite an existing entry.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other actors. The `Context`
/// type is injected into every hook by `run()`, which lets dependencies be bound
/// late (after all actors exist).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Key the entity is stored under; unique within one actor.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload of a `Create` request.
    type Create: Send + Sync + Debug;

    /// Payload of an `Update` request.
    type Update: Send + Sync + Debug;

    /// Operations beyond CRUD, usually an enum.
    type Action: Send + Sync + Debug;

    /// What `handle_action` hands back to the caller.
    type ActionResult: Send + Sync + Debug;

    /// Criteria accepted by `List`. Use `()` if the resource is never filtered.
    type Filter: Send + Sync + Debug;

    /// Dependencies passed to `run()`; `()` when there are none.
    type Context: Send + Sync;

    /// Hook failures, boxed into `FrameworkError::EntityError` by the actor.
    ///
    /// One enum per actor rather than one per message: clients match on a single
    /// type, at the cost of every operation nominally being able to return every
    /// variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id this entity is stored under.
    fn id(&self) -> &Self::Id;

    /// Builds the entity from its generated id and the create payload.
    /// Runs before `on_create`; an error leaves the store untouched.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity belongs in a filtered `List` result.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// Returning an error aborts the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Runs an action against the stored entity.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
