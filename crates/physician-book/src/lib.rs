//! # Physician Address Book
//!
//! Keeps the physicians address book in step with submitted orders.
//!
//! - **[model]**: physicians, address-book entries, saved orders, order submissions.
//! - **[address_book]** / **[saved_orders]**: the two stores, each a
//!   [`ResourceActor`](actor_store::ResourceActor) with a uniqueness key.
//! - **[clients]**: domain wrappers around the generic store clients.
//! - **[reconciler]**: the create-or-update rule and the previous-order projection.
//! - **[lifecycle]**: starts, seeds, resets and shuts down the whole system.
//! - **[config]**: settings read from the environment.

pub mod address_book;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod reconciler;
pub mod saved_orders;
pub mod validation;
