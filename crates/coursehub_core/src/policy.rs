//! Publish-lock policy.
//!
//! # Responsibility
//! - Decide whether a mutation on a course, module or lesson is allowed,
//!   based on the publish state of the owning course.
//!
//! # Invariants
//! - Lookups are read-only and keep no state between calls.
//! - A missing target is reported as not found, never as locked.
//! - `Draft` allows every mutation; `Published` rejects every mutation on
//!   the course subtree, including adding children.

use crate::model::course::CourseId;
use crate::model::course_module::ModuleId;
use crate::model::lesson::LessonId;
use crate::model::publish::PublishState;
use crate::model::EntityKind;
use crate::repo::{RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Entity whose ancestor course decides the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockTarget {
    /// The course itself.
    Course(CourseId),
    /// Resolved through `modulos.curso_id`.
    Module(ModuleId),
    /// Resolved through `lecciones.modulo_id -> modulos.curso_id`.
    Lesson(LessonId),
}

impl LockTarget {
    pub fn kind(self) -> EntityKind {
        match self {
            Self::Course(_) => EntityKind::Course,
            Self::Module(_) => EntityKind::Module,
            Self::Lesson(_) => EntityKind::Lesson,
        }
    }

    pub fn id(self) -> i64 {
        match self {
            Self::Course(id) | Self::Module(id) | Self::Lesson(id) => id,
        }
    }
}

impl Display for LockTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

/// Read-only lookup of the ancestor course's publish state.
pub trait PublishLockLookup {
    /// Returns `None` when the target entity does not exist.
    fn publish_state(&self, target: LockTarget) -> RepoResult<Option<PublishState>>;
}

/// Policy rejection or lookup failure.
#[derive(Debug)]
pub enum PolicyError {
    /// Target entity does not exist.
    NotFound(LockTarget),
    /// Owning course is published.
    Locked(LockTarget),
    /// Lookup could not reach the store.
    Repo(RepoError),
}

impl Display for PolicyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(target) => write!(f, "{} not found: {}", target.kind(), target.id()),
            Self::Locked(target) => {
                write!(f, "{target} belongs to a published course and cannot be modified")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PolicyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for PolicyError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Publish-lock policy over one lookup implementation.
pub struct PublishLockPolicy<L: PublishLockLookup> {
    lookup: L,
}

impl<L: PublishLockLookup> PublishLockPolicy<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Resolves the publish state governing `target`.
    pub fn publish_state(&self, target: LockTarget) -> Result<PublishState, PolicyError> {
        self.lookup
            .publish_state(target)?
            .ok_or(PolicyError::NotFound(target))
    }

    /// Fails unless `target` exists and its owning course is still a draft.
    pub fn ensure_unlocked(&self, target: LockTarget) -> Result<(), PolicyError> {
        if self.publish_state(target)?.is_locked() {
            return Err(PolicyError::Locked(target));
        }
        Ok(())
    }
}
