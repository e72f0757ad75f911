//! # Scripted Clients for Tests
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are
//! answered from a queue of scripted expectations instead of a running actor.
//! Use it to test code *around* a client (a checkout flow, an HTTP handler)
//! without spawning the actor, and to inject failures a real actor would
//! rarely produce.
//!
//! ## Testing Strategies
//!
//! - **Pure mock**: client wrapper logic against `MockClient`.
//! - **Single actor**: spawn one `ResourceActor` and drive it through its client.
//! - **Actor with mocked collaborators**: the real actor under test, the clients
//!   it depends on backed by mocks.
//! - **Full system**: every actor real, wired by the lifecycle layer.
//!
//! ## Simulating failures
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Seat { id: String }
//! #[derive(Debug)] struct SeatCreate;
//! #[derive(Debug, thiserror::Error)] #[error("seat error")] struct SeatError;
//!
//! #[async_trait]
//! impl ActorEntity for Seat {
//!     type Id = String; type Create = SeatCreate; type Update = (); type Action = ();
//!     type ActionResult = (); type Filter = (); type Context = (); type Error = SeatError;
//!     fn id(&self) -> &String { &self.id }
//!     fn from_create_params(id: String, _: SeatCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Seat>::new();
//!     mock.expect_get("A1".to_string()).return_err(FrameworkError::ActorClosed);
//!
//!     let result = mock.client().get("A1".to_string()).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use the fluent [`MockClient`] API, or [`create_mock_client`] plus the
//! `expect_*` helpers to receive raw requests and answer them by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// A scripted reply for the next request of the matching kind.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// Answers a [`ResourceClient`]'s requests from a queue of expectations.
///
/// Expectations are consumed in order. A request that doesn't match the next
/// expectation (wrong kind or wrong id) panics the mock task, which drops the
/// reply channel; the caller then sees [`FrameworkError::ActorDropped`].
///
/// ```ignore
/// let mut mock = MockClient::<TableLock>::new();
/// mock.expect_delete(TableId::parse("T1")?).return_ok(());
/// let tables = TableClient::new(mock.client());
/// tables.release(&TableId::parse("T1")?).await?;
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// An empty script; every request panics until expectations are queued.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to, .. },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// A client wired to this script. Clones share the same queue.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Queues a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> Reply<'_, T, Option<T>> {
        Reply::new(self, move |response| Expectation::Get { id, response })
    }

    /// Queues a `create` with any payload.
    pub fn expect_create(&mut self) -> Reply<'_, T, T> {
        Reply::new(self, |response| Expectation::Create { response })
    }

    /// Queues a `list` with any filter.
    pub fn expect_list(&mut self) -> Reply<'_, T, Vec<T>> {
        Reply::new(self, |response| Expectation::List { response })
    }

    /// Queues a `delete` for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> Reply<'_, T, ()> {
        Reply::new(self, move |response| Expectation::Delete { id, response })
    }

    /// Queues an action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> Reply<'_, T, T::ActionResult> {
        Reply::new(self, move |response| Expectation::Action { id, response })
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Finishes an expectation by choosing its reply.
pub struct Reply<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a>,
}

impl<'a, T: ActorEntity, R> Reply<'a, T, R> {
    fn new(
        mock: &'a MockClient<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a,
    ) -> Self {
        Self {
            mock,
            build: Box::new(build),
        }
    }

    /// Replies with `value`.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.build)(Ok(value)));
    }

    /// Replies with `error`.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.build)(Err(error)));
    }
}

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers automatically: the test pulls each request with one of the
/// `expect_*` helpers, asserts on its payload and replies through the returned
/// sender. Handy when the payload itself is what's under test.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Pulls the next request, which must be a `Create`.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Pulls the next request, which must be a `List`.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Option<T::Filter>,
    oneshot::Sender<Result<Vec<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Pulls the next request, which must be an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
