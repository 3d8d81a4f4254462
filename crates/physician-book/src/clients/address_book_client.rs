//! # Address Book Client
//!
//! Wraps a `ResourceClient<AddressBookEntry>` and exposes the lookups and mutations the
//! reconciler and the provider process need.
use crate::address_book::{AddressBookAction, AddressBookError};
use crate::model::{
    AddressBookCriteria, AddressBookEntry, AddressBookId, AddressBookUpdate, IdentityKey,
    Physician,
};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the address-book actor.
#[derive(Clone)]
pub struct AddressBookClient {
    inner: ResourceClient<AddressBookEntry>,
}

impl AddressBookClient {
    pub fn new(inner: ResourceClient<AddressBookEntry>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<AddressBookEntry> for AddressBookClient {
    type Error = AddressBookError;

    fn inner(&self) -> &ResourceClient<AddressBookEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        AddressBookError::from(e)
    }
}

impl AddressBookClient {
    /// The entry holding `key`, if any. The store keeps keys unique, so there is at most one.
    #[instrument(skip(self))]
    pub async fn find_by_identity(
        &self,
        key: &IdentityKey,
    ) -> Result<Option<AddressBookEntry>, AddressBookError> {
        debug!("Sending request");
        let hits = self
            .inner
            .find(AddressBookCriteria::Identity(key.clone()))
            .await?;
        Ok(hits.into_iter().next())
    }

    /// Every entry with this email, compared case-insensitively.
    #[instrument(skip(self))]
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<AddressBookEntry>, AddressBookError> {
        debug!("Sending request");
        Ok(self
            .inner
            .find(AddressBookCriteria::Email(email.to_string()))
            .await?)
    }

    /// Stores the physician as a new entry and returns it.
    ///
    /// Fails with [`AddressBookError::Conflict`] when an entry with the same identity
    /// already exists.
    #[instrument(skip(self, physician), fields(key = ?physician.identity_key()))]
    pub async fn insert(&self, physician: Physician) -> Result<AddressBookEntry, AddressBookError> {
        debug!("Sending request");
        let id = self.inner.create(physician).await?;
        self.inner
            .get(id)
            .await?
            .ok_or_else(|| AddressBookError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_entry(
        &self,
        id: AddressBookId,
        update: AddressBookUpdate,
    ) -> Result<AddressBookEntry, AddressBookError> {
        debug!("Sending request");
        Ok(self.inner.update(id, update).await?)
    }

    /// Sets the palmetto tag of an entry, returning the tag it replaced.
    #[instrument(skip(self))]
    pub async fn tag_palmetto(
        &self,
        id: AddressBookId,
        tag: &str,
    ) -> Result<Option<String>, AddressBookError> {
        debug!("Tagging entry {}", id);
        Ok(self
            .inner
            .perform_action(id, AddressBookAction::TagPalmetto(tag.to_string()))
            .await?)
    }
}
