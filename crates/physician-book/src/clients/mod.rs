//! Type-safe wrappers around [`ResourceClient`](actor_store::ResourceClient).

pub mod address_book_client;
pub mod saved_order_client;

pub use address_book_client::*;
pub use saved_order_client::*;
