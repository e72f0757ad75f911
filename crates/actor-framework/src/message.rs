//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the lifecycle of a stored resource: `Create`, `Get`,
/// `List`, `Update`, `Delete`, plus `Action` for resource-specific operations
/// that don't fit CRUD (e.g. attaching feedback to an order).
///
/// Every variant is generic over `T: ActorEntity`, so a table-lock payload can
/// never be sent to the order actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    /// Insert a new entity. Fails with [`FrameworkError::AlreadyExists`] when the
    /// derived id is taken; the check and the insert are one step.
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Snapshot of the store in arrival order, optionally filtered.
    List {
        filter: Option<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete { id: T::Id, respond_to: Response<()> },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
