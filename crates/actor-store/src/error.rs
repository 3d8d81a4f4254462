//! # Store Errors
//!
//! Errors raised by the store runtime itself, independent of any entity type.

/// Errors that can occur within the actor store.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A create or mutation would give two entities the same identity key.
    /// Carries the debug rendering of the key.
    #[error("Identity key already taken: {0}")]
    Conflict(String),
    /// The `u32` ID counter cannot advance any further.
    #[error("No IDs left to assign")]
    IdsExhausted,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
