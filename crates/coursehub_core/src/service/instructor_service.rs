//! Instructor use-case service.
//!
//! # Invariants
//! - An instructor owning any published course cannot be deleted.
//! - Duplicate emails surface as `DuplicateEmail`, leaving the existing
//!   instructor untouched.

use super::{ServiceError, ServiceResult};
use crate::model::instructor::{Instructor, InstructorId, InstructorInput};
use crate::model::EntityKind;
use crate::repo::instructor_repo::InstructorRepository;
use crate::repo::RepoError;
use log::info;

/// Instructor service facade.
pub struct InstructorService<R: InstructorRepository> {
    repo: R,
}

impl<R: InstructorRepository> InstructorService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_instructors(&self) -> ServiceResult<Vec<Instructor>> {
        self.repo.list_instructors().map_err(Into::into)
    }

    pub fn get_instructor(&self, id: InstructorId) -> ServiceResult<Instructor> {
        self.repo
            .get_instructor(id)?
            .ok_or(ServiceError::NotFound(EntityKind::Instructor, id))
    }

    /// Creates one instructor; both `nombre` and `email` are required.
    pub fn create_instructor(&self, input: InstructorInput) -> ServiceResult<InstructorId> {
        let instructor = input.into_new()?;
        self.repo
            .create_instructor(&instructor)
            .map_err(|err| duplicate_email_or(err, &instructor.email))
    }

    /// Applies a partial update naming any non-empty subset of
    /// `nombre`/`email`.
    pub fn update_instructor(
        &self,
        id: InstructorId,
        input: InstructorInput,
    ) -> ServiceResult<()> {
        let patch = input.into_patch()?;
        self.repo.update_instructor(id, &patch).map_err(|err| {
            duplicate_email_or(err, patch.email.as_deref().unwrap_or_default())
        })
    }

    /// Deletes one instructor unless it still owns published courses.
    ///
    /// Draft courses of the instructor are kept with no instructor.
    pub fn delete_instructor(&self, id: InstructorId) -> ServiceResult<()> {
        let published_courses = self.repo.count_published_courses(id)?;
        if published_courses > 0 {
            return Err(ServiceError::InstructorHasPublishedCourses {
                instructor_id: id,
                published_courses,
            });
        }

        self.repo.delete_instructor(id)?;
        info!(
            "event=instructor_delete module=service status=ok instructor_id={}",
            id
        );
        Ok(())
    }
}

fn duplicate_email_or(err: RepoError, email: &str) -> ServiceError {
    match err {
        RepoError::UniqueViolation(_) => ServiceError::DuplicateEmail(email.to_string()),
        other => other.into(),
    }
}
