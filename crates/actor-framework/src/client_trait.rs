//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default
//! `get`, `list` and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// A wrapper only supplies access to its inner client and a mapping from
/// [`FrameworkError`] into its own error type.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Seat { id: String }
/// #[derive(Debug)] struct SeatCreate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct SeatError(String);
///
/// #[async_trait]
/// impl ActorEntity for Seat {
///     type Id = String; type Create = SeatCreate; type Update = (); type Action = ();
///     type ActionResult = (); type Filter = (); type Context = (); type Error = SeatError;
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(id: String, _: SeatCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct SeatClient { inner: ResourceClient<Seat> }
///
/// #[async_trait]
/// impl ActorClient<Seat> for SeatClient {
///     type Error = SeatError;
///     fn inner(&self) -> &ResourceClient<Seat> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error { SeatError(e.to_string()) }
/// }
///
/// async fn usage(client: SeatClient) {
///     // get(), list() and delete() come for free.
///     let _ = client.get("A1".to_string()).await;
///     let _ = client.list(None).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Snapshot of entities in arrival order, optionally filtered.
    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: Option<T::Filter>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(filter).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
