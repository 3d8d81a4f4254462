//! Error types for the address book.

use actor_store::FrameworkError;
use thiserror::Error;

/// Errors that can occur during address-book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddressBookError {
    /// The requested entry was not found.
    #[error("Address-book entry not found: {0}")]
    NotFound(String),

    /// Another entry already holds the identity key.
    #[error("Physician already in the address book: {0}")]
    Conflict(String),

    /// The palmetto tag was blank.
    #[error("Palmetto tag must not be empty")]
    EmptyPalmetto,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for AddressBookError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => AddressBookError::NotFound(id),
            FrameworkError::Conflict(key) => AddressBookError::Conflict(key),
            FrameworkError::EntityError(e) => match e.downcast::<AddressBookError>() {
                Ok(own) => *own,
                Err(e) => AddressBookError::ActorCommunicationError(e.to_string()),
            },
            other => AddressBookError::ActorCommunicationError(other.to_string()),
        }
    }
}
