//! Core domain logic for CourseHub.
//! This crate is the single source of truth for catalog invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod policy;
pub mod repo;
pub mod service;

pub use db::{
    open_db, open_db_in_memory, run_in_transaction, run_read_transaction, DbError, DbResult,
};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::course::{CourseDetail, CourseId, CourseInput, CourseSummary};
pub use model::course_module::{CourseModule, ModuleId, ModuleInput, ModuleWithLessons};
pub use model::instructor::{Instructor, InstructorId, InstructorInput};
pub use model::lesson::{Lesson, LessonId, LessonInput};
pub use model::publish::PublishState;
pub use model::validation::ValidationError;
pub use model::EntityKind;
pub use policy::{LockTarget, PublishLockPolicy};
pub use repo::{RepoError, RepoResult};
pub use service::{Catalog, ErrorKind, ServiceError, ServiceResult};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
