//! [`ActorEntity`] implementation for [`AddressBookEntry`].
//!
//! The identity key is the physician's [`IdentityKey`], so the store itself refuses a
//! second entry for the same physician id, or a second no-id entry for the same
//! case-folded name.

use super::actions::AddressBookAction;
use super::error::AddressBookError;
use crate::model::{
    AddressBookCriteria, AddressBookEntry, AddressBookId, AddressBookUpdate, IdentityKey,
    Physician,
};
use actor_store::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for AddressBookEntry {
    type Id = AddressBookId;
    type Create = Physician;
    type Update = AddressBookUpdate;
    type Criteria = AddressBookCriteria;
    type Key = IdentityKey;
    type Action = AddressBookAction;
    type ActionResult = Option<String>;
    type Context = ();
    type Error = AddressBookError;

    /// New entries are stored verbatim, without a palmetto tag.
    fn from_create_params(id: AddressBookId, physician: Physician) -> Result<Self, Self::Error> {
        Ok(Self::new(id, physician))
    }

    fn matches(&self, criteria: &AddressBookCriteria) -> bool {
        match criteria {
            AddressBookCriteria::Identity(key) => &self.physician.identity_key() == key,
            AddressBookCriteria::Email(email) => self.physician.email.eq_ignore_ascii_case(email),
        }
    }

    fn identity_key(&self) -> Option<IdentityKey> {
        Some(self.physician.identity_key())
    }

    async fn on_update(
        &mut self,
        update: AddressBookUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        update.apply(&mut self.physician);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: AddressBookAction,
        _ctx: &Self::Context,
    ) -> Result<Option<String>, Self::Error> {
        match action {
            AddressBookAction::TagPalmetto(tag) => {
                if tag.trim().is_empty() {
                    return Err(AddressBookError::EmptyPalmetto);
                }
                Ok(self.palmetto.replace(tag))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(physician_id: &str, first: &str, last: &str) -> AddressBookEntry {
        AddressBookEntry::new(
            AddressBookId(1),
            Physician {
                physician_id: physician_id.to_string(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: "rick@example.com".to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_identity_criteria_separates_modes() {
        let no_id = entry("", "Rick", "Chihu");
        let with_id = entry("-22222", "Rick", "Chihu");
        let by_name = AddressBookCriteria::Identity(IdentityKey::Name {
            first: "rick".to_string(),
            last: "chihu".to_string(),
        });

        assert!(no_id.matches(&by_name));
        assert!(!with_id.matches(&by_name));
        assert!(with_id.matches(&AddressBookCriteria::Identity(IdentityKey::PhysicianId(
            "-22222".to_string()
        ))));
    }

    #[test]
    fn test_email_criteria_ignores_case() {
        let stored = entry("", "Rick", "Chihu");
        assert!(stored.matches(&AddressBookCriteria::Email("Rick@Example.com".to_string())));
    }

    #[tokio::test]
    async fn test_tag_palmetto_returns_previous_tag() {
        let mut stored = entry("-22222", "Jane", "Doe");

        let previous = stored
            .handle_action(AddressBookAction::TagPalmetto("P-1".to_string()), &())
            .await
            .unwrap();
        assert_eq!(previous, None);

        let previous = stored
            .handle_action(AddressBookAction::TagPalmetto("P-2".to_string()), &())
            .await
            .unwrap();
        assert_eq!(previous.as_deref(), Some("P-1"));
        assert_eq!(stored.palmetto.as_deref(), Some("P-2"));

        let blank = stored
            .handle_action(AddressBookAction::TagPalmetto(" ".to_string()), &())
            .await;
        assert_eq!(blank, Err(AddressBookError::EmptyPalmetto));
    }

    #[tokio::test]
    async fn test_update_keeps_palmetto() {
        let mut stored = entry("", "Rick", "Chihu");
        stored.palmetto = Some("P-7".to_string());

        let submitted = Physician {
            first_name: "rick".to_string(),
            last_name: "chihu".to_string(),
            ..Default::default()
        };
        stored
            .on_update(AddressBookUpdate::replace_all(&submitted), &())
            .await
            .unwrap();

        assert_eq!(stored.palmetto.as_deref(), Some("P-7"));
        assert_eq!(stored.physician.first_name, "rick");
    }
}
