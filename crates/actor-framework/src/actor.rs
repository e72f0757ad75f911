//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a keyed
//! store of entities. It implements the "server" side of the Actor Model:
//! messages are processed one at a time, so every request observes and mutates
//! the store as a single critical section.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::snapshot::SnapshotSink;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Derives the id for a create payload. Runs inside the actor task, so it is
/// never called concurrently.
pub type IdGenerator<T> =
    Box<dyn FnMut(&<T as ActorEntity>::Create) -> <T as ActorEntity>::Id + Send>;

/// The generic actor that manages a collection of entities.
///
/// Each actor runs in its own Tokio task and exclusively owns `store`; no
/// `Mutex` is needed because nothing else can reach it. A `Create` that checks
/// for an existing key and inserts the new entity happens inside one message, so
/// two racing creates for the same key can never both succeed.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new(buffer, id_generator)` returns the actor and its client.
/// 2.  **Configure**: optionally `with_seed` (restore persisted entities) and `with_sink`.
/// 3.  **Run**: spawn `actor.run(context)` in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Seat { id: String }
/// #[derive(Debug)] struct SeatCreate { label: String }
/// #[derive(Debug, thiserror::Error)] #[error("seat error")] struct SeatError;
///
/// #[async_trait]
/// impl ActorEntity for Seat {
///     type Id = String;
///     type Create = SeatCreate;
///     type Update = ();
///     type Action = ();
///     type ActionResult = ();
///     type Filter = ();
///     type Context = ();
///     type Error = SeatError;
///
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(id: String, _: SeatCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     // The seat label is the key.
///     let (actor, client) = ResourceActor::<Seat>::new(10, |p: &SeatCreate| p.label.clone());
///     tokio::spawn(actor.run(()));
///
///     assert!(client.create(SeatCreate { label: "A1".into() }).await.is_ok());
///     assert!(client.create(SeatCreate { label: "A1".into() }).await.is_err());
/// }
/// ```
///
/// # Operations
///
/// * **Create**: derive the id, reject it if present, build the entity, run
///   `on_create`, insert, append to the arrival order, snapshot, return the entity.
/// * **Get**: clone of the entity or `None`.
/// * **List**: clones in arrival order, filtered through [`ActorEntity::matches`].
/// * **Update** / **Action**: run the hook on the stored entity, snapshot on success.
/// * **Delete**: run `on_delete`, remove, snapshot.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    arrival: Vec<T::Id>,
    next_id: IdGenerator<T>,
    sink: Option<Box<dyn SnapshotSink<T>>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id` - Id generator, called once per `Create`.
    ///
    /// # Panics
    ///
    /// Panics if `buffer_size` is 0.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut(&T::Create) -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            arrival: Vec::new(),
            next_id: Box::new(next_id),
            sink: None,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Pre-populates the store, keeping the given order as arrival order.
    /// Later duplicates of an id are skipped.
    pub fn with_seed(mut self, items: impl IntoIterator<Item = T>) -> Self {
        for item in items {
            let id = item.id().clone();
            if self.store.contains_key(&id) {
                warn!(%id, "Skipping duplicate seed entry");
                continue;
            }
            self.arrival.push(id.clone());
            self.store.insert(id, item);
        }
        self
    }

    /// Attaches a sink that receives the full store after every mutation.
    pub fn with_sink(mut self, sink: impl SnapshotSink<T> + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    fn ordered(&self, filter: Option<&T::Filter>) -> Vec<T> {
        self.arrival
            .iter()
            .filter_map(|id| self.store.get(id))
            .filter(|item| filter.map_or(true, |f| item.matches(f)))
            .cloned()
            .collect()
    }

    /// Borrows only the sink, so the run future stays `Send` while it awaits.
    fn pending_snapshot(&self) -> Option<(&dyn SnapshotSink<T>, Vec<T>)> {
        self.sink
            .as_deref()
            .map(|sink| (sink, self.ordered(None)))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "table_order::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id)(&params);
                    if self.store.contains_key(&id) {
                        debug!(entity_type, %id, "Already exists");
                        let _ = respond_to.send(Err(FrameworkError::AlreadyExists(id.to_string())));
                        continue;
                    }

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            self.arrival.push(id.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            persist(self.pending_snapshot(), entity_type).await;
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items = self.ordered(filter.as_ref());
                    debug!(entity_type, ?filter, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let updated = item.clone();
                    info!(entity_type, %id, "Updated");
                    persist(self.pending_snapshot(), entity_type).await;
                    let _ = respond_to.send(Ok(updated));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        debug!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    self.arrival.retain(|existing| existing != &id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    persist(self.pending_snapshot(), entity_type).await;
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => {
                            info!(entity_type, %id, "Action ok");
                            persist(self.pending_snapshot(), entity_type).await;
                        }
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

async fn persist<T: ActorEntity>(pending: Option<(&dyn SnapshotSink<T>, Vec<T>)>, entity_type: &str) {
    if let Some((sink, items)) = pending {
        if let Err(e) = sink.persist(&items).await {
            error!(entity_type, error = %e, "Snapshot failed");
        }
    }
}
