//! Lesson use-case service.

use super::{ServiceError, ServiceResult};
use crate::model::lesson::{Lesson, LessonId, LessonInput};
use crate::model::EntityKind;
use crate::policy::{LockTarget, PublishLockLookup, PublishLockPolicy};
use crate::repo::lesson_repo::LessonRepository;

/// Lesson service facade.
pub struct LessonService<R: LessonRepository, L: PublishLockLookup> {
    repo: R,
    policy: PublishLockPolicy<L>,
}

impl<R: LessonRepository, L: PublishLockLookup> LessonService<R, L> {
    pub fn new(repo: R, policy: PublishLockPolicy<L>) -> Self {
        Self { repo, policy }
    }

    pub fn get_lesson(&self, id: LessonId) -> ServiceResult<Lesson> {
        self.repo
            .get_lesson(id)?
            .ok_or(ServiceError::NotFound(EntityKind::Lesson, id))
    }

    /// Replaces title and content of a lesson whose course is a draft.
    pub fn update_lesson(&self, id: LessonId, input: LessonInput) -> ServiceResult<()> {
        self.policy.ensure_unlocked(LockTarget::Lesson(id))?;
        let fields = input.into_fields()?;
        self.repo.update_lesson(id, &fields).map_err(Into::into)
    }

    pub fn delete_lesson(&self, id: LessonId) -> ServiceResult<()> {
        self.policy.ensure_unlocked(LockTarget::Lesson(id))?;
        self.repo.delete_lesson(id).map_err(Into::into)
    }
}
