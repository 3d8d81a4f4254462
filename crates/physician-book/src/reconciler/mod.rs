//! # Address Book Reconciler
//!
//! Decides whether the physician of a submitted order updates an existing address-book
//! entry or becomes a new one, then rewrites the account's previous-order data.
//!
//! ## Identity
//!
//! | Submitted `physicianId` | Matched against | On match, overwritten |
//! |-------------------------|-----------------|-----------------------|
//! | non-empty | the entry with the same physician id | contact details only |
//! | empty or blank | the no-id entry with the same name, ignoring case | every physician field |
//!
//! Under physician-id identity the stored physician id, facility id and names never change
//! (see [`NameCasing`] for the one configurable exception). Under name identity any change
//! beyond case is a different physician, so a typo creates a second entry.
//!
//! Physician and facility ids are trimmed before matching, storing and projecting.
//!
//! Every call makes exactly one change to the address book: one insert or one update. The
//! `palmetto` tag is never written here.
//!
//! ## Races
//!
//! Two submissions of the same unseen physician can both miss on lookup. The store lets
//! only one insert through; the other gets a conflict, finds the winner and merges into it.
//!
//! ```rust
//! use physician_book::config::Config;
//! use physician_book::lifecycle::BookSystem;
//! use physician_book::model::{OrderSubmission, Physician};
//! use physician_book::reconciler::Outcome;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = BookSystem::new(&Config::default());
//!     let physician = Physician {
//!         first_name: "Rick".to_string(),
//!         last_name: "Chihu".to_string(),
//!         email: "rick@example.com".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let first = system.reconciler.reconcile(&OrderSubmission::new(physician.clone())).await?;
//!     assert_eq!(first.outcome, Outcome::Created);
//!
//!     let recased = Physician { first_name: "rick".to_string(), ..physician };
//!     let second = system.reconciler.reconcile(&OrderSubmission::new(recased)).await?;
//!     assert_eq!(second.outcome, Outcome::Updated);
//!     assert_eq!(second.entry.physician.first_name, "rick");
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::*;

use crate::address_book::AddressBookError;
use crate::clients::{AddressBookClient, SavedOrderClient};
use crate::config::NameCasing;
use crate::model::{
    AddressBookEntry, AddressBookUpdate, IdentityKey, OrderSubmission, Physician, PrevOrderData,
    SavedOrder,
};
use crate::validation::validate_physician;
use actor_store::ActorClient;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// What a submission did to the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Created,
    Updated,
}

/// The result of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation {
    pub entry: AddressBookEntry,
    pub outcome: Outcome,
    pub prev_order_data: PrevOrderData,
}

#[derive(Clone)]
pub struct AddressBookReconciler {
    address_book: AddressBookClient,
    saved_orders: SavedOrderClient,
    name_casing: NameCasing,
}

impl AddressBookReconciler {
    pub fn new(
        address_book: AddressBookClient,
        saved_orders: SavedOrderClient,
        name_casing: NameCasing,
    ) -> Self {
        Self {
            address_book,
            saved_orders,
            name_casing,
        }
    }

    /// Applies a submitted order to the address book and the account's saved order.
    #[instrument(skip(self, order), fields(account = %order.account))]
    pub async fn reconcile(&self, order: &OrderSubmission) -> Result<Reconciliation, ReconcileError> {
        let physician = &order.physician.normalized();
        validate_physician(physician)?;

        let key = physician.identity_key();
        let (entry, outcome) = self.insert_or_merge(physician, &key).await?;

        let prev_order_data = PrevOrderData::project(physician, entry.id);
        self.saved_orders
            .replace_prev_order_data(&order.account, prev_order_data.clone())
            .await?;

        info!(id = %entry.id, ?outcome, external = key.is_external(), "Reconciled");
        Ok(Reconciliation {
            entry,
            outcome,
            prev_order_data,
        })
    }

    /// Every entry of the address book, in no particular order.
    pub async fn list_address_book(&self) -> Result<Vec<AddressBookEntry>, ReconcileError> {
        Ok(self.address_book.list().await?)
    }

    pub async fn saved_order(&self, account: &str) -> Result<Option<SavedOrder>, ReconcileError> {
        Ok(self.saved_orders.saved_order(account).await?)
    }

    pub async fn prev_order_data(
        &self,
        account: &str,
    ) -> Result<Option<PrevOrderData>, ReconcileError> {
        Ok(self
            .saved_order(account)
            .await?
            .map(|saved| saved.prev_order_data))
    }

    async fn insert_or_merge(
        &self,
        physician: &Physician,
        key: &IdentityKey,
    ) -> Result<(AddressBookEntry, Outcome), ReconcileError> {
        if let Some(existing) = self.address_book.find_by_identity(key).await? {
            let entry = self.merge_into(&existing, physician).await?;
            return Ok((entry, Outcome::Updated));
        }

        match self.address_book.insert(physician.clone()).await {
            Ok(entry) => Ok((entry, Outcome::Created)),
            Err(AddressBookError::Conflict(taken)) => {
                warn!(key = %taken, "Lost insert race, merging into the winner");
                let winner = self
                    .address_book
                    .find_by_identity(key)
                    .await?
                    .ok_or(AddressBookError::Conflict(taken))?;
                let entry = self.merge_into(&winner, physician).await?;
                Ok((entry, Outcome::Updated))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn merge_into(
        &self,
        stored: &AddressBookEntry,
        physician: &Physician,
    ) -> Result<AddressBookEntry, ReconcileError> {
        let update = self.merge_update(stored, physician);
        Ok(self.address_book.update_entry(stored.id, update).await?)
    }

    fn merge_update(&self, stored: &AddressBookEntry, physician: &Physician) -> AddressBookUpdate {
        if physician.external_id().is_none() {
            return AddressBookUpdate::replace_all(physician);
        }

        let update = AddressBookUpdate::contact_details(physician);
        match self.name_casing {
            NameCasing::Follow if stored.physician.same_name_as(physician) => {
                update.with_name(physician)
            }
            _ => update,
        }
    }
}
