use crate::model::Physician;
use serde::{Deserialize, Serialize};

/// Account used when a submission does not name one.
pub const DEFAULT_ACCOUNT: &str = "default";

fn default_account() -> String {
    DEFAULT_ACCOUNT.to_string()
}

/// An order as submitted by an ordering account, reduced to what the address book needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[serde(default = "default_account")]
    pub account: String,
    pub physician: Physician,
}

impl OrderSubmission {
    /// A submission on behalf of the default account.
    pub fn new(physician: Physician) -> Self {
        Self {
            account: default_account(),
            physician,
        }
    }

    pub fn for_account(account: impl Into<String>, physician: Physician) -> Self {
        Self {
            account: account.into(),
            physician,
        }
    }
}
