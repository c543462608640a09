//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, publish-lock checks and repository calls into
//!   use-case level APIs.
//! - Map repository and policy failures onto one error taxonomy.
//! - Keep HTTP/CLI layers decoupled from storage details.
//!
//! # Invariants
//! - Mutations on an existing entity check existence, then the publish
//!   lock, then the input, before writing.
//! - Every failure surfaces as exactly one `ErrorKind`.

use crate::model::validation::ValidationError;
use crate::model::EntityKind;
use crate::policy::{LockTarget, PolicyError, PublishLockPolicy};
use crate::repo::course_repo::SqliteCourseRepository;
use crate::repo::instructor_repo::SqliteInstructorRepository;
use crate::repo::lesson_repo::SqliteLessonRepository;
use crate::repo::lock_repo::SqlitePublishLockLookup;
use crate::repo::module_repo::SqliteModuleRepository;
use crate::repo::{ensure_catalog_ready, RepoError, RepoResult};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod course_service;
pub mod instructor_service;
pub mod lesson_service;
pub mod module_service;

use course_service::CourseService;
use instructor_service::InstructorService;
use lesson_service::LessonService;
use module_service::ModuleService;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Coarse error classes exposed to outer layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Locked,
    Conflict,
    Storage,
}

/// Errors from catalog service operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Target entity (or a referenced parent) does not exist.
    NotFound(EntityKind, i64),
    /// Caller input is missing required fields.
    Validation(ValidationError),
    /// Target belongs to a published course.
    Locked(LockTarget),
    /// Another instructor already uses this email.
    DuplicateEmail(String),
    /// Instructor still owns published courses.
    InstructorHasPublishedCourses {
        instructor_id: i64,
        published_courses: u32,
    },
    /// Store failure.
    Repo(RepoError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(..) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Locked(_) => ErrorKind::Locked,
            Self::DuplicateEmail(_) | Self::InstructorHasPublishedCourses { .. } => {
                ErrorKind::Conflict
            }
            Self::Repo(_) => ErrorKind::Storage,
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(kind, id) => write!(f, "{kind} not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Locked(target) => match target {
                LockTarget::Course(id) => {
                    write!(f, "course {id} is published and can no longer be modified")
                }
                other => write!(
                    f,
                    "{other} belongs to a published course and can no longer be modified"
                ),
            },
            Self::DuplicateEmail(email) => write!(f, "email is already registered: {email}"),
            Self::InstructorHasPublishedCourses {
                instructor_id,
                published_courses,
            } => write!(
                f,
                "instructor {instructor_id} cannot be deleted: owns {published_courses} published course(s)"
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(kind, id) => Self::NotFound(kind, id),
            other => Self::Repo(other),
        }
    }
}

impl From<PolicyError> for ServiceError {
    fn from(value: PolicyError) -> Self {
        match value {
            PolicyError::NotFound(target) => Self::NotFound(target.kind(), target.id()),
            PolicyError::Locked(target) => Self::Locked(target),
            PolicyError::Repo(err) => err.into(),
        }
    }
}

impl From<rusqlite::Error> for ServiceError {
    fn from(value: rusqlite::Error) -> Self {
        RepoError::from(value).into()
    }
}

/// All catalog services bound to one connection (or open transaction).
pub struct Catalog<'conn> {
    pub instructors: InstructorService<SqliteInstructorRepository<'conn>>,
    pub courses: CourseService<
        SqliteCourseRepository<'conn>,
        SqliteModuleRepository<'conn>,
        SqlitePublishLockLookup<'conn>,
    >,
    pub modules: ModuleService<
        SqliteModuleRepository<'conn>,
        SqliteLessonRepository<'conn>,
        SqlitePublishLockLookup<'conn>,
    >,
    pub lessons: LessonService<SqliteLessonRepository<'conn>, SqlitePublishLockLookup<'conn>>,
}

impl<'conn> Catalog<'conn> {
    /// Builds the catalog after checking the connection is migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_catalog_ready(conn)?;
        let policy = || PublishLockPolicy::new(SqlitePublishLockLookup::new(conn));
        Ok(Self {
            instructors: InstructorService::new(SqliteInstructorRepository::new(conn)),
            courses: CourseService::new(
                SqliteCourseRepository::new(conn),
                SqliteModuleRepository::new(conn),
                policy(),
            ),
            modules: ModuleService::new(
                SqliteModuleRepository::new(conn),
                SqliteLessonRepository::new(conn),
                policy(),
            ),
            lessons: LessonService::new(SqliteLessonRepository::new(conn), policy()),
        })
    }
}
