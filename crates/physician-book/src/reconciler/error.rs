//! Errors surfaced by [`AddressBookReconciler`](super::AddressBookReconciler).

use crate::address_book::AddressBookError;
use crate::saved_orders::SavedOrderError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReconcileError {
    /// The submitted physician is incomplete. Nothing was stored.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    AddressBook(#[from] AddressBookError),

    #[error(transparent)]
    SavedOrders(#[from] SavedOrderError),
}
