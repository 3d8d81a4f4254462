//! # Saved Orders
//!
//! The saved-orders store keeps the [`PrevOrderData`](crate::model::PrevOrderData) of each
//! ordering account, keyed by account name.
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`SavedOrder`]
//! - [`error`] - [`SavedOrderError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::SavedOrderClient;
use crate::model::SavedOrder;
use actor_store::ResourceActor;

/// Creates the saved-orders actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<SavedOrder>, SavedOrderClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, SavedOrderClient::new(client))
}
