//! Input validation shared by catalog input models.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for caller-provided input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required fields are absent or blank, listed in declaration order.
    MissingFields(Vec<&'static str>),
    /// A partial update named none of the updatable fields.
    NoFieldsToUpdate(&'static [&'static str]),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                let quoted = fields
                    .iter()
                    .map(|field| format!("'{field}'"))
                    .collect::<Vec<_>>()
                    .join(", ");
                if fields.len() == 1 {
                    write!(f, "field {quoted} is required")
                } else {
                    write!(f, "fields {quoted} are required")
                }
            }
            Self::NoFieldsToUpdate(fields) => write!(
                f,
                "at least one field ({}) is required for update",
                fields.join(", ")
            ),
        }
    }
}

impl Error for ValidationError {}

/// Trims text input; blank values count as absent.
pub fn normalize_text(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

/// Builds the error for the `(field, is_missing)` checks that failed.
pub(crate) fn missing_fields(checks: &[(&'static str, bool)]) -> ValidationError {
    ValidationError::MissingFields(
        checks
            .iter()
            .filter(|(_, is_missing)| *is_missing)
            .map(|(field, _)| *field)
            .collect(),
    )
}
