//! Lesson domain model.

use super::course_module::ModuleId;
use super::validation::{missing_fields, normalize_text, ValidationError};
use serde::{Deserialize, Serialize};

pub type LessonId = i64;

/// Lesson read model. A lesson always belongs to exactly one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    pub id: LessonId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "contenido")]
    pub content: Option<String>,
    #[serde(rename = "modulo_id")]
    pub module_id: ModuleId,
}

/// Raw lesson body as sent by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LessonInput {
    #[serde(default, rename = "titulo")]
    pub title: Option<String>,
    #[serde(default, rename = "contenido")]
    pub content: Option<String>,
}

/// Validated lesson fields, used for creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonFields {
    pub title: String,
    pub content: Option<String>,
}

impl LessonInput {
    /// Validates lesson input; `titulo` is required, `contenido` is kept
    /// verbatim and cleared when absent.
    pub fn into_fields(self) -> Result<LessonFields, ValidationError> {
        let title =
            normalize_text(self.title).ok_or_else(|| missing_fields(&[("titulo", true)]))?;
        Ok(LessonFields {
            title,
            content: self.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::LessonInput;

    #[test]
    fn content_is_kept_verbatim() {
        let fields = LessonInput {
            title: Some(" Variables ".into()),
            content: Some("  let x = 1;\n".into()),
        }
        .into_fields()
        .unwrap();
        assert_eq!(fields.title, "Variables");
        assert_eq!(fields.content.as_deref(), Some("  let x = 1;\n"));
    }

    #[test]
    fn missing_title_is_rejected() {
        let err = LessonInput::default().into_fields().unwrap_err();
        assert_eq!(err.to_string(), "field 'titulo' is required");
    }
}
