//! # Generic Store Actor
//!
//! This module defines the `ResourceActor`, the component that owns one collection of
//! entities. It implements the "Server" side of the Actor Model: requests are processed
//! one at a time, so every operation (including the uniqueness check of a create) is
//! atomic with respect to every other request on the same collection.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store` and the
/// uniqueness `index`) and the receiver end of the channel. Because the loop handles one
/// message at a time, no `Mutex` or `RwLock` guards the state.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use actor_store::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, title: String }
/// #[derive(Debug)] struct NoteCreate { title: String }
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Criteria = String;
///     type Key = String;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, p: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, title: p.title })
///     }
///     fn matches(&self, title: &String) -> bool { &self.title == title }
///     fn identity_key(&self) -> Option<String> { Some(self.title.to_lowercase()) }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.create(NoteCreate { title: "Groceries".into() }).await.unwrap();
///     // Same identity key: refused.
///     assert!(client.create(NoteCreate { title: "groceries".into() }).await.is_err());
/// }
/// ```
///
/// # Operations
///
/// * **Create**: builds the entity with the next `u32` ID, runs `on_create`, checks the
///   identity key against the index and stores it. A taken key answers `Conflict` and
///   leaves the store untouched.
/// * **Update** / **Action**: run the hook on a working copy, then commit it only if its
///   identity key is still unique. A failed hook leaves the stored entity unchanged.
/// * **Find** / **List** / **Get**: return clones.
/// * **Delete**: runs `on_delete`, then removes the entity and its key.
/// * **DeleteAll**: clears the collection without running hooks.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    index: HashMap<T::Key, T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client calls
    /// wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            index: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name ("AddressBookEntry" instead of the full module path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Find {
                    criteria,
                    respond_to,
                } => {
                    let hits: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&criteria))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?criteria, hits = hits.len(), "Find");
                    let _ = respond_to.send(Ok(hits));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::DeleteAll { respond_to } => {
                    let removed = self.store.len();
                    self.store.clear();
                    self.index.clear();
                    info!(entity_type, removed, "Cleared");
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.act(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let following = self
            .next_id
            .checked_add(1)
            .ok_or(FrameworkError::IdsExhausted)?;
        let id = T::Id::from(self.next_id);
        let mut item = T::from_create_params(id.clone(), params).map_err(entity_error)?;
        item.on_create(context).await.map_err(entity_error)?;

        let key = item.identity_key();
        if let Some(key) = &key {
            if self.index.contains_key(key) {
                return Err(FrameworkError::Conflict(format!("{key:?}")));
            }
        }

        self.next_id = following;
        if let Some(key) = key {
            self.index.insert(key, id.clone());
        }
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut working = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        working
            .on_update(update, context)
            .await
            .map_err(entity_error)?;
        self.commit(id, working.clone())?;
        Ok(working)
    }

    async fn act(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let mut working = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let result = working
            .handle_action(action, context)
            .await
            .map_err(entity_error)?;
        self.commit(id, working)?;
        Ok(result)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context).await.map_err(entity_error)?;

        if let Some(item) = self.store.remove(id) {
            if let Some(key) = item.identity_key() {
                self.index.remove(&key);
            }
        }
        Ok(())
    }

    /// Replaces the stored entity, moving its index entry if the key changed.
    fn commit(&mut self, id: &T::Id, item: T) -> Result<(), FrameworkError> {
        let previous = self.store.get(id).and_then(|old| old.identity_key());
        let next = item.identity_key();

        if previous != next {
            if let Some(key) = &next {
                if self.index.get(key).is_some_and(|owner| owner != id) {
                    return Err(FrameworkError::Conflict(format!("{key:?}")));
                }
            }
            if let Some(key) = previous {
                self.index.remove(&key);
            }
            if let Some(key) = next {
                self.index.insert(key, id.clone());
            }
        }

        self.store.insert(id.clone(), item);
        Ok(())
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}
