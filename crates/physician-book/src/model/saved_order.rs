use crate::model::{AddressBookId, Physician};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Snapshot of the physician used by the last order of an account.
///
/// Rewritten wholesale on every submission, from the submitted fields and the id of the
/// entry the submission landed on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrevOrderData {
    pub physician_address_book_id: AddressBookId,
    pub physician_id: String,
    pub physician_facility_id: String,
    pub physician_institution: String,
    pub physician_first_name: String,
    pub physician_last_name: String,
    pub physician_address: String,
    pub physician_city_state: String,
    pub physician_zip_code: String,
    pub physician_country: String,
    pub physician_phone_number: String,
    pub physician_fax_number: String,
    pub physician_email: String,
}

impl PrevOrderData {
    pub fn project(physician: &Physician, entry_id: AddressBookId) -> Self {
        Self {
            physician_address_book_id: entry_id,
            physician_id: physician.physician_id.clone(),
            physician_facility_id: physician.facility_id.clone(),
            physician_institution: physician.institution.clone(),
            physician_first_name: physician.first_name.clone(),
            physician_last_name: physician.last_name.clone(),
            physician_address: physician.address.clone(),
            physician_city_state: physician.city_state.clone(),
            physician_zip_code: physician.zip_code.clone(),
            physician_country: physician.country.clone(),
            physician_phone_number: physician.phone_number.clone(),
            physician_fax_number: physician.fax_number.clone(),
            physician_email: physician.email.clone(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SavedOrderId(pub u32);

impl From<u32> for SavedOrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SavedOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "saved_{}", self.0)
    }
}

/// The saved-order record of one ordering account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedOrder {
    #[serde(skip)]
    pub id: SavedOrderId,
    pub account: String,
    pub prev_order_data: PrevOrderData,
}

#[derive(Debug, Clone)]
pub struct SavedOrderCreate {
    pub account: String,
    pub prev_order_data: PrevOrderData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedOrderCriteria {
    Account(String),
}
