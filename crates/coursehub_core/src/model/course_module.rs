//! Course module domain model.

use super::course::CourseId;
use super::lesson::Lesson;
use super::validation::{missing_fields, normalize_text, ValidationError};
use serde::{Deserialize, Serialize};

pub type ModuleId = i64;

/// Module read model. A module always belongs to exactly one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseModule {
    pub id: ModuleId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "curso_id")]
    pub course_id: CourseId,
}

/// Module with its lessons ordered by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleWithLessons {
    #[serde(flatten)]
    pub module: CourseModule,
    #[serde(rename = "lecciones")]
    pub lessons: Vec<Lesson>,
}

/// Raw module body as sent by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleInput {
    #[serde(default, rename = "titulo")]
    pub title: Option<String>,
}

impl ModuleInput {
    /// Returns the normalized module title.
    pub fn into_title(self) -> Result<String, ValidationError> {
        normalize_text(self.title).ok_or_else(|| missing_fields(&[("titulo", true)]))
    }
}
