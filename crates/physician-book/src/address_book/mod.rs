//! # Address Book
//!
//! The address-book store: a [`ResourceActor`] owning every [`AddressBookEntry`], with the
//! physician's identity key as its uniqueness key.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`AddressBookEntry`]
//! - [`error`] - [`AddressBookError`]
//! - [`actions`] - [`AddressBookAction`], the palmetto tagging used by the provider process
//! - [`new()`] - creates the actor and its domain client
//!
//! ## Usage
//!
//! ```rust
//! use physician_book::address_book;
//! use physician_book::model::Physician;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = address_book::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let physician = Physician {
//!         first_name: "Rick".to_string(),
//!         last_name: "Chihu".to_string(),
//!         email: "rick@example.com".to_string(),
//!         ..Default::default()
//!     };
//!     let entry = client.insert(physician.clone()).await?;
//!     assert_eq!(client.find_by_identity(&physician.identity_key()).await?, Some(entry));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::AddressBookClient;
use crate::model::AddressBookEntry;
use actor_store::ResourceActor;

/// Creates the address-book actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<AddressBookEntry>, AddressBookClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, AddressBookClient::new(client))
}
