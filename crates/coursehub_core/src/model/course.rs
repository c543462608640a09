//! Course domain model.
//!
//! # Invariants
//! - `state` is the only source of truth for the publish lock.
//! - `instructor_id` may be `None` after the owning instructor is deleted.

use super::course_module::ModuleWithLessons;
use super::instructor::InstructorId;
use super::publish::PublishState;
use super::validation::{missing_fields, normalize_text, ValidationError};
use serde::{Deserialize, Serialize};

pub type CourseId = i64;

/// Course row joined with its instructor name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub id: CourseId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "is_published", serialize_with = "PublishState::serialize_flag")]
    pub state: PublishState,
    pub instructor_id: Option<InstructorId>,
    #[serde(rename = "instructor_nombre")]
    pub instructor_name: Option<String>,
}

/// Course with its modules and their lessons, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: CourseSummary,
    #[serde(rename = "modulos")]
    pub modules: Vec<ModuleWithLessons>,
}

/// Raw course body as sent by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CourseInput {
    #[serde(default, rename = "titulo")]
    pub title: Option<String>,
    #[serde(default, rename = "descripcion")]
    pub description: Option<String>,
    #[serde(default)]
    pub instructor_id: Option<InstructorId>,
}

/// Validated course creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
    pub instructor_id: InstructorId,
}

/// Full replacement of a course's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseUpdate {
    pub title: String,
    pub description: Option<String>,
    pub instructor_id: Option<InstructorId>,
}

impl CourseInput {
    /// Validates creation input; `titulo` and `instructor_id` are required.
    ///
    /// Ids are assigned from 1, so a zero or negative `instructor_id` counts
    /// as missing.
    pub fn into_new(self) -> Result<NewCourse, ValidationError> {
        let instructor_id = self.instructor_id.filter(|id| *id > 0);
        match (normalize_text(self.title), instructor_id) {
            (Some(title), Some(instructor_id)) => Ok(NewCourse {
                title,
                description: normalize_text(self.description),
                instructor_id,
            }),
            (title, instructor_id) => Err(missing_fields(&[
                ("titulo", title.is_none()),
                ("instructor_id", instructor_id.is_none()),
            ])),
        }
    }

    /// Validates replacement input; absent optional fields are cleared.
    pub fn into_update(self) -> Result<CourseUpdate, ValidationError> {
        let title =
            normalize_text(self.title).ok_or_else(|| missing_fields(&[("titulo", true)]))?;
        Ok(CourseUpdate {
            title,
            description: normalize_text(self.description),
            instructor_id: self.instructor_id,
        })
    }
}
