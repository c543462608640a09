//! Course use-case service.
//!
//! # Responsibility
//! - Course CRUD, the publish action and module creation under a course.
//!
//! # Invariants
//! - Update, delete and module creation require the course to be a draft.
//! - Publishing is allowed in any state and never reverts.
//! - A course always references an existing instructor when created.

use super::{ServiceError, ServiceResult};
use crate::model::course::{CourseDetail, CourseId, CourseInput, CourseSummary};
use crate::model::course_module::{CourseModule, ModuleId, ModuleInput};
use crate::model::instructor::InstructorId;
use crate::model::publish::PublishState;
use crate::model::EntityKind;
use crate::policy::{LockTarget, PublishLockLookup, PublishLockPolicy};
use crate::repo::course_repo::CourseRepository;
use crate::repo::module_repo::ModuleRepository;
use crate::repo::RepoError;
use log::info;

/// Course service facade.
pub struct CourseService<R: CourseRepository, M: ModuleRepository, L: PublishLockLookup> {
    repo: R,
    modules: M,
    policy: PublishLockPolicy<L>,
}

impl<R, M, L> CourseService<R, M, L>
where
    R: CourseRepository,
    M: ModuleRepository,
    L: PublishLockLookup,
{
    pub fn new(repo: R, modules: M, policy: PublishLockPolicy<L>) -> Self {
        Self {
            repo,
            modules,
            policy,
        }
    }

    /// Lists every course with its instructor name.
    pub fn list_courses(&self) -> ServiceResult<Vec<CourseSummary>> {
        self.repo.list_courses().map_err(Into::into)
    }

    /// Loads one course with its modules and their lessons.
    pub fn get_course(&self, id: CourseId) -> ServiceResult<CourseDetail> {
        self.repo
            .get_course_detail(id)?
            .ok_or(ServiceError::NotFound(EntityKind::Course, id))
    }

    /// Creates a draft course owned by an existing instructor.
    pub fn create_course(&self, input: CourseInput) -> ServiceResult<CourseId> {
        let course = input.into_new()?;
        self.repo
            .create_course(&course)
            .map_err(|err| missing_instructor_or(err, Some(course.instructor_id)))
    }

    /// Replaces title, description and instructor of a draft course.
    pub fn update_course(&self, id: CourseId, input: CourseInput) -> ServiceResult<()> {
        self.policy.ensure_unlocked(LockTarget::Course(id))?;
        let update = input.into_update()?;
        self.repo
            .update_course(id, &update)
            .map_err(|err| missing_instructor_or(err, update.instructor_id))
    }

    /// Deletes a draft course together with its modules and lessons.
    pub fn delete_course(&self, id: CourseId) -> ServiceResult<()> {
        self.policy.ensure_unlocked(LockTarget::Course(id))?;
        self.repo.delete_course(id)?;
        info!(
            "event=course_delete module=service status=ok course_id={}",
            id
        );
        Ok(())
    }

    /// Latches the course into `Published` and returns the resulting state.
    pub fn publish_course(&self, id: CourseId) -> ServiceResult<PublishState> {
        let current = self.policy.publish_state(LockTarget::Course(id))?;
        let next = current.publish();
        if next != current {
            self.repo.publish_course(id)?;
            info!(
                "event=course_publish module=service status=ok course_id={}",
                id
            );
        }
        Ok(next)
    }

    /// Adds a module to a draft course.
    pub fn add_module(&self, course_id: CourseId, input: ModuleInput) -> ServiceResult<ModuleId> {
        self.policy.ensure_unlocked(LockTarget::Course(course_id))?;
        let title = input.into_title()?;
        self.modules
            .create_module(course_id, &title)
            .map_err(Into::into)
    }

    /// Lists the modules of one course.
    pub fn list_modules(&self, course_id: CourseId) -> ServiceResult<Vec<CourseModule>> {
        self.policy.publish_state(LockTarget::Course(course_id))?;
        self.modules.list_modules(course_id).map_err(Into::into)
    }
}

fn missing_instructor_or(err: RepoError, instructor_id: Option<InstructorId>) -> ServiceError {
    match (err, instructor_id) {
        (RepoError::ForeignKeyViolation(_), Some(instructor_id)) => {
            ServiceError::NotFound(EntityKind::Instructor, instructor_id)
        }
        (other, _) => other.into(),
    }
}
