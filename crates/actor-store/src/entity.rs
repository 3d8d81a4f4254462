//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every stored record (address-book
//! entries, saved orders, ...) must implement to be managed by the generic `ResourceActor`.
//! It specifies associated types for IDs, DTOs, lookup criteria, uniqueness keys, actions,
//! context and errors, and provides lifecycle hooks (`on_create`, `on_update`, `on_delete`,
//! `handle_action`).
//!
//! # Uniqueness
//! An entity may expose an [`identity_key`](ActorEntity::identity_key). The actor keeps an
//! index of those keys and refuses any create or mutation that would give two entities the
//! same key, answering with [`FrameworkError::Conflict`](crate::FrameworkError::Conflict).
//! This is the store-level guarantee that callers doing find-then-create can rely on when
//! two of them race.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::identity_key`] (default: no key, never conflicts)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The default hook implementations do nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// The `Context` type is injected into every hook at `run()` time, so dependencies
/// can be bound after the actor was constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Lookup criteria understood by [`ActorEntity::matches`].
    type Criteria: Send + Sync + Debug;

    /// Uniqueness key. Two live entities never share the same key.
    type Key: Eq + Hash + Clone + Send + Sync + Debug;

    /// Enum representing entity-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per entity; every hook reports through it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity satisfies the lookup criteria.
    fn matches(&self, criteria: &Self::Criteria) -> bool;

    /// The uniqueness key of this entity, if it has one.
    fn identity_key(&self) -> Option<Self::Key> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    ///
    /// The hook runs against a working copy; the store only keeps the result if the
    /// hook succeeds and the resulting identity key is still unique.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom entity-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
