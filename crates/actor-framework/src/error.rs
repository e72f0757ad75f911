//! # Framework Errors
//!
//! Failures of the actor machinery itself, plus entity errors passed through
//! in a box. Resource clients map these into their own error enums.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's channel is closed; its task has ended.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the reply channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A create derived a key that is already present in the store.
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    /// An entity hook failed.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
