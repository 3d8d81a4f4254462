/// Operations on an entry beyond create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressBookAction {
    /// Set the provider-assigned palmetto tag. Answers with the previous tag.
    TagPalmetto(String),
}
