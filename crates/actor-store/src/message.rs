//! # Store Messages
//!
//! The request type exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation.
///
/// The variants cover what a persistence layer offers for one collection:
///
/// - **Create**: insert a new entity built from [`ActorEntity::Create`].
/// - **Get**: fetch one entity by ID.
/// - **Find**: every entity matching [`ActorEntity::Criteria`].
/// - **List**: every entity.
/// - **Update**: apply an [`ActorEntity::Update`] to one entity.
/// - **Delete** / **DeleteAll**: remove one entity, or clear the collection.
/// - **Action**: run a custom [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Find {
        criteria: T::Criteria,
        respond_to: Response<Vec<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    DeleteAll {
        respond_to: Response<usize>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Name of the requested operation, for logs and diagnostics.
    pub fn operation(&self) -> &'static str {
        match self {
            ResourceRequest::Create { .. } => "create",
            ResourceRequest::Get { .. } => "get",
            ResourceRequest::Find { .. } => "find",
            ResourceRequest::List { .. } => "list",
            ResourceRequest::Update { .. } => "update",
            ResourceRequest::Delete { .. } => "delete",
            ResourceRequest::DeleteAll { .. } => "delete_all",
            ResourceRequest::Action { .. } => "action",
        }
    }
}
