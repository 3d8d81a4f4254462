//! Error types for saved orders.

use actor_store::FrameworkError;
use thiserror::Error;

/// Errors that can occur during saved-order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SavedOrderError {
    #[error("Saved order not found: {0}")]
    NotFound(String),

    /// Another saved order already belongs to the account.
    #[error("Account already has a saved order: {0}")]
    Conflict(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for SavedOrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => SavedOrderError::NotFound(id),
            FrameworkError::Conflict(account) => SavedOrderError::Conflict(account),
            FrameworkError::EntityError(e) => match e.downcast::<SavedOrderError>() {
                Ok(own) => *own,
                Err(e) => SavedOrderError::ActorCommunicationError(e.to_string()),
            },
            other => SavedOrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
