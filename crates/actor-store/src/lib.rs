//! # Actor Store
//!
//! Building blocks for in-process, actor-owned entity collections. Each collection is a
//! [`ResourceActor`] running in its own Tokio task; callers talk to it through a cheap,
//! cloneable [`ResourceClient`].
//!
//! ## Why an actor per collection?
//!
//! - **Isolated state**: the collection and its uniqueness index belong to one task. No locks.
//! - **Sequential processing**: requests run one at a time, so "is this identity key taken?"
//!   and "store this entity" can never interleave with another writer.
//! - **Uniform API**: the same find / create / update / delete / action surface for every
//!   entity type, with per-entity DTOs enforced by associated types.
//!
//! Further reading: [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/).
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain records, lookup criteria, identity keys, hooks.
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop, storage, uniqueness index.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed request/response.
//!
//! ## Find-or-create under concurrency
//!
//! A caller that does `find` and then `create` can lose a race against another caller doing
//! the same. The store turns the loser's create into [`FrameworkError::Conflict`] instead of
//! a duplicate, and the caller recovers by finding the winner and updating it. The
//! `physician-book` crate's reconciler is the reference user of this pattern.
//!
//! ## Context Injection
//!
//! Dependencies are injected at `run(context)` time rather than at construction, so actors
//! can be created first and wired afterwards.
//!
//! ## Testing
//!
//! [`mock::MockClient`] scripts store answers (including conflicts and closed channels) for
//! tests of code that sits around a client.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
