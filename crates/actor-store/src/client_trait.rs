//! # ActorClient Trait
//!
//! Common interface for domain clients: default `get`, `list`, `delete` and `delete_all`
//! built on top of a generic `ResourceClient`, with errors mapped into the domain's own
//! error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard read and delete operations.
///
/// Implementors provide access to the inner [`ResourceClient`] and a mapping from
/// [`FrameworkError`] to their own error type; everything else has a default.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map store errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Remove every entity, returning how many were removed.
    #[tracing::instrument(skip(self))]
    async fn delete_all(&self) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete_all().await.map_err(Self::map_error)
    }
}
