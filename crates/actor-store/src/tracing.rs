//! # Observability
//!
//! Every store actor logs through `tracing` with an `entity_type` field, so one
//! subscriber covers all collections:
//!
//! ```text
//! INFO Actor started entity_type="AddressBookEntry"
//! INFO Created entity_type="AddressBookEntry" id=book_3 size=3
//! WARN Create failed entity_type="AddressBookEntry" error=Identity key already taken: ...
//! ```
//!
//! `RUST_LOG=debug` additionally shows every request with its payload.

use tracing_subscriber::EnvFilter;

/// Installs the global compact fmt subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from `default_filter`.
/// Call once, from the binary.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where a line comes from
        .compact()
        .init();
}
