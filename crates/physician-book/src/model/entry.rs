//! Address-book entries and the DTOs used to look them up and change them.
//!
//! [`AddressBookEntry`] implements [`ActorEntity`](actor_store::ActorEntity) in
//! [`crate::address_book::entity`], so a [`ResourceActor`](actor_store::ResourceActor) owns
//! the collection and keeps one entry per [`IdentityKey`].

use crate::model::{IdentityKey, Physician};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for address-book entries.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AddressBookId(pub u32);

impl From<u32> for AddressBookId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AddressBookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "book_{}", self.0)
    }
}

/// An entry of the physicians address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookEntry {
    pub id: AddressBookId,
    /// Provider-assigned tag. Written only through
    /// [`AddressBookAction::TagPalmetto`](crate::address_book::AddressBookAction::TagPalmetto).
    #[serde(default)]
    pub palmetto: Option<String>,
    #[serde(flatten)]
    pub physician: Physician,
}

impl AddressBookEntry {
    pub fn new(id: AddressBookId, physician: Physician) -> Self {
        Self {
            id,
            palmetto: None,
            physician,
        }
    }
}

/// Lookup criteria for address-book entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressBookCriteria {
    Identity(IdentityKey),
    Email(String),
}

/// Field-level update of an entry. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBookUpdate {
    pub physician_id: Option<String>,
    pub facility_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub institution: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub city_state: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub fax_number: Option<String>,
}

impl AddressBookUpdate {
    /// Overwrites every physician field with the submitted values.
    pub fn replace_all(physician: &Physician) -> Self {
        Self {
            physician_id: Some(physician.physician_id.clone()),
            facility_id: Some(physician.facility_id.clone()),
            ..Self::contact_details(physician).with_name(physician)
        }
    }

    /// Overwrites everything except the physician id, facility id and name.
    pub fn contact_details(physician: &Physician) -> Self {
        Self {
            institution: Some(physician.institution.clone()),
            address: Some(physician.address.clone()),
            zip_code: Some(physician.zip_code.clone()),
            city_state: Some(physician.city_state.clone()),
            country: Some(physician.country.clone()),
            email: Some(physician.email.clone()),
            phone_number: Some(physician.phone_number.clone()),
            fax_number: Some(physician.fax_number.clone()),
            ..Default::default()
        }
    }

    /// Also overwrite first and last name.
    pub fn with_name(mut self, physician: &Physician) -> Self {
        self.first_name = Some(physician.first_name.clone());
        self.last_name = Some(physician.last_name.clone());
        self
    }

    pub fn apply(self, physician: &mut Physician) {
        let fields = [
            (self.physician_id, &mut physician.physician_id),
            (self.facility_id, &mut physician.facility_id),
            (self.first_name, &mut physician.first_name),
            (self.last_name, &mut physician.last_name),
            (self.institution, &mut physician.institution),
            (self.address, &mut physician.address),
            (self.zip_code, &mut physician.zip_code),
            (self.city_state, &mut physician.city_state),
            (self.country, &mut physician.country),
            (self.email, &mut physician.email),
            (self.phone_number, &mut physician.phone_number),
            (self.fax_number, &mut physician.fax_number),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Physician {
        Physician {
            physician_id: "-22222".to_string(),
            facility_id: "222222".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            institution: "Facility 1".to_string(),
            email: "jane@example.com".to_string(),
            ..Default::default()
        }
    }

    fn submitted() -> Physician {
        Physician {
            physician_id: "-99999".to_string(),
            facility_id: "999999".to_string(),
            first_name: "Janet".to_string(),
            last_name: "Dough".to_string(),
            institution: "new Facility".to_string(),
            email: "new_email@example.com".to_string(),
            fax_number: "(999) 999-9999".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_contact_details_keeps_identity_fields() {
        let mut physician = stored();
        AddressBookUpdate::contact_details(&submitted()).apply(&mut physician);

        assert_eq!(physician.physician_id, "-22222");
        assert_eq!(physician.facility_id, "222222");
        assert_eq!(physician.first_name, "Jane");
        assert_eq!(physician.last_name, "Doe");
        assert_eq!(physician.institution, "new Facility");
        assert_eq!(physician.email, "new_email@example.com");
        assert_eq!(physician.fax_number, "(999) 999-9999");
    }

    #[test]
    fn test_replace_all_overwrites_everything() {
        let mut physician = stored();
        AddressBookUpdate::replace_all(&submitted()).apply(&mut physician);
        assert_eq!(physician, submitted());
    }

    #[test]
    fn test_entry_json_is_flat() {
        let entry = AddressBookEntry::new(AddressBookId(3), stored());
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["palmetto"], serde_json::Value::Null);
        assert_eq!(json["physicianId"], "-22222");
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["zipCode"], "");
    }
}
