//! Pure data structures: physicians as submitted, address-book entries, saved orders.
//!
//! Field names serialize in camelCase so the JSON matches what the ordering front end
//! sends and reads back.

pub mod entry;
pub mod order;
pub mod physician;
pub mod saved_order;

pub use entry::*;
pub use order::*;
pub use physician::*;
pub use saved_order::*;
