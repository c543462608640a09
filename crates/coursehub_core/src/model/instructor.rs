//! Instructor domain model.
//!
//! # Invariants
//! - `email` is unique across instructors (enforced by the store).
//! - A patch always carries at least one field.

use super::validation::{missing_fields, normalize_text, ValidationError};
use serde::{Deserialize, Serialize};

pub type InstructorId = i64;

/// Instructor read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instructor {
    pub id: InstructorId,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
}

/// Raw instructor body as sent by callers. Used for both create and
/// partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstructorInput {
    #[serde(default, rename = "nombre", alias = "name")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Validated instructor creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInstructor {
    pub name: String,
    pub email: String,
}

/// Partial instructor update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructorPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

const UPDATABLE_FIELDS: &[&str] = &["nombre", "email"];

impl InstructorInput {
    /// Validates input for instructor creation; both fields are required.
    pub fn into_new(self) -> Result<NewInstructor, ValidationError> {
        match (normalize_text(self.name), normalize_text(self.email)) {
            (Some(name), Some(email)) => Ok(NewInstructor { name, email }),
            (name, email) => Err(missing_fields(&[
                ("nombre", name.is_none()),
                ("email", email.is_none()),
            ])),
        }
    }

    /// Validates input for a partial update; any non-empty subset is accepted.
    pub fn into_patch(self) -> Result<InstructorPatch, ValidationError> {
        let patch = InstructorPatch {
            name: normalize_text(self.name),
            email: normalize_text(self.email),
        };
        if patch.is_empty() {
            return Err(ValidationError::NoFieldsToUpdate(UPDATABLE_FIELDS));
        }
        Ok(patch)
    }
}

impl InstructorPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Column assignments for the fields this patch sets, in column order.
    pub fn assignments(&self) -> Vec<(&'static str, &str)> {
        [("nombre", self.name.as_deref()), ("email", self.email.as_deref())]
            .into_iter()
            .filter_map(|(column, value)| value.map(|value| (column, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{InstructorInput, InstructorPatch};
    use crate::model::validation::ValidationError;

    #[test]
    fn into_new_requires_name_and_email() {
        let err = InstructorInput {
            name: Some("Ana".into()),
            email: Some("  ".into()),
        }
        .into_new()
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["email"]));
    }

    #[test]
    fn into_patch_rejects_empty_body() {
        let err = InstructorInput::default().into_patch().unwrap_err();
        assert!(matches!(err, ValidationError::NoFieldsToUpdate(_)));
    }

    #[test]
    fn patch_assignments_only_include_set_fields() {
        let patch = InstructorPatch {
            name: None,
            email: Some("new@x.com".into()),
        };
        assert_eq!(patch.assignments(), vec![("email", "new@x.com")]);

        let full = InstructorPatch {
            name: Some("Ana".into()),
            email: Some("ana@x.com".into()),
        };
        assert_eq!(
            full.assignments(),
            vec![("nombre", "Ana"), ("email", "ana@x.com")]
        );
    }

    #[test]
    fn input_accepts_name_alias() {
        let input: InstructorInput =
            serde_json::from_str(r#"{"name":"Ana","email":"ana@x.com"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Ana"));
    }
}
