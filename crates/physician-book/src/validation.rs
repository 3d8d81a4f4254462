//! Checks a submitted physician before any store is touched.

use crate::model::Physician;
use crate::reconciler::ReconcileError;

/// Validates a submitted physician.
///
/// Email, first name and last name are required; blank after trimming counts as missing.
pub fn validate_physician(physician: &Physician) -> Result<(), ReconcileError> {
    let required = [
        ("email", &physician.email),
        ("firstName", &physician.first_name),
        ("lastName", &physician.last_name),
    ];

    let missing: Vec<&str> = required
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

    if !missing.is_empty() {
        return Err(ReconcileError::Validation(format!(
            "physician is missing {}",
            missing.join(", ")
        )));
    }

    Ok(())
}
