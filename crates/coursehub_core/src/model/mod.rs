//! Course catalog domain model.
//!
//! # Responsibility
//! - Define read models returned to callers and input models accepted from
//!   them.
//! - Normalize and validate caller input before it reaches repositories.
//!
//! # Invariants
//! - Every entity is identified by a store-assigned integer id.
//! - Serialized field names match persisted column names (`titulo`,
//!   `nombre`, ...), which is also the external JSON shape.
//! - A course's publish state only ever moves from draft to published.

use serde::Serialize;
use std::fmt::{Display, Formatter};

pub mod course;
pub mod course_module;
pub mod instructor;
pub mod lesson;
pub mod publish;
pub mod validation;

/// Catalog entity kinds, used to label not-found and locked errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Instructor,
    Course,
    Module,
    Lesson,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Instructor => "instructor",
            Self::Course => "course",
            Self::Module => "module",
            Self::Lesson => "lesson",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
