use serde::{Deserialize, Deserializer, Serialize};

/// A physician as submitted inside an order.
///
/// Every field is free text and defaults to the empty string when missing or `null`. An
/// empty `physician_id` means the physician has no external identity and is recognized by
/// name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Physician {
    #[serde(deserialize_with = "null_as_empty")]
    pub physician_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub facility_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub zip_code: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub city_state: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub country: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub fax_number: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// How an address-book entry is recognized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    /// External physician id, compared exactly.
    PhysicianId(String),
    /// First and last name, case-folded.
    Name { first: String, last: String },
}

impl IdentityKey {
    /// Whether the key is an external physician id.
    pub fn is_external(&self) -> bool {
        matches!(self, IdentityKey::PhysicianId(_))
    }
}

impl Physician {
    /// The external physician id, if one was given.
    pub fn external_id(&self) -> Option<&str> {
        let id = self.physician_id.trim();
        (!id.is_empty()).then_some(id)
    }

    /// The same physician with surrounding whitespace removed from physician and facility
    /// id, the form in which submissions are matched and stored.
    pub fn normalized(&self) -> Physician {
        Physician {
            physician_id: self.physician_id.trim().to_string(),
            facility_id: self.facility_id.trim().to_string(),
            ..self.clone()
        }
    }

    pub fn identity_key(&self) -> IdentityKey {
        match self.external_id() {
            Some(id) => IdentityKey::PhysicianId(id.to_string()),
            None => IdentityKey::Name {
                first: fold(&self.first_name),
                last: fold(&self.last_name),
            },
        }
    }

    /// Same first and last name, ignoring case.
    pub fn same_name_as(&self, other: &Physician) -> bool {
        fold(&self.first_name) == fold(&other.first_name)
            && fold(&self.last_name) == fold(&other.last_name)
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}
