//! Module use-case service.
//!
//! # Invariants
//! - Every mutation, including lesson creation, requires the ancestor
//!   course to be a draft.

use super::{ServiceError, ServiceResult};
use crate::model::course_module::{ModuleId, ModuleInput, ModuleWithLessons};
use crate::model::lesson::{Lesson, LessonId, LessonInput};
use crate::model::EntityKind;
use crate::policy::{LockTarget, PublishLockLookup, PublishLockPolicy};
use crate::repo::lesson_repo::LessonRepository;
use crate::repo::module_repo::ModuleRepository;

/// Module service facade.
pub struct ModuleService<R: ModuleRepository, S: LessonRepository, L: PublishLockLookup> {
    repo: R,
    lessons: S,
    policy: PublishLockPolicy<L>,
}

impl<R, S, L> ModuleService<R, S, L>
where
    R: ModuleRepository,
    S: LessonRepository,
    L: PublishLockLookup,
{
    pub fn new(repo: R, lessons: S, policy: PublishLockPolicy<L>) -> Self {
        Self {
            repo,
            lessons,
            policy,
        }
    }

    pub fn get_module(&self, id: ModuleId) -> ServiceResult<ModuleWithLessons> {
        self.repo
            .get_module_with_lessons(id)?
            .ok_or(ServiceError::NotFound(EntityKind::Module, id))
    }

    pub fn rename_module(&self, id: ModuleId, input: ModuleInput) -> ServiceResult<()> {
        self.policy.ensure_unlocked(LockTarget::Module(id))?;
        let title = input.into_title()?;
        self.repo.rename_module(id, &title).map_err(Into::into)
    }

    /// Deletes a module and, through the store cascade, its lessons.
    pub fn delete_module(&self, id: ModuleId) -> ServiceResult<()> {
        self.policy.ensure_unlocked(LockTarget::Module(id))?;
        self.repo.delete_module(id).map_err(Into::into)
    }

    pub fn add_lesson(&self, module_id: ModuleId, input: LessonInput) -> ServiceResult<LessonId> {
        self.policy.ensure_unlocked(LockTarget::Module(module_id))?;
        let fields = input.into_fields()?;
        self.lessons
            .create_lesson(module_id, &fields)
            .map_err(Into::into)
    }

    pub fn list_lessons(&self, module_id: ModuleId) -> ServiceResult<Vec<Lesson>> {
        self.policy.publish_state(LockTarget::Module(module_id))?;
        self.lessons.list_lessons(module_id).map_err(Into::into)
    }
}
