//! # System Lifecycle
//!
//! Creates the store actors, injects their clients into the reconciler and shuts
//! everything down again.
//!
//! Neither store has dependencies (`Context = ()`), so both actors are spawned first and
//! the reconciler is built from clones of their clients. Shutdown drops every client,
//! including the reconciler's clones; each actor sees its channel close and returns.

pub mod book_system;

pub use book_system::*;
