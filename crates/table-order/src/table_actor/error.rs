//! Error types for the Table actor.

use thiserror::Error;

/// Errors that can occur during table lock operations.
///
/// A table that is already locked is not an error: [`lock`](crate::clients::TableClient::lock)
/// reports it as `Ok(false)`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    /// The table number was missing or blank.
    #[error("Table number required")]
    TableRequired,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
