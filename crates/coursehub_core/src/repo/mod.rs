//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define one data access contract per catalog table.
//! - Isolate SQLite query details from service/business orchestration.
//! - Classify store constraint failures into semantic errors.
//!
//! # Invariants
//! - List queries are ordered by `id ASC`.
//! - Repository APIs return semantic errors (`NotFound`, `UniqueViolation`,
//!   `ForeignKeyViolation`) in addition to DB transport errors.
//! - Repositories never decide publish-lock policy; services do.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::EntityKind;
use rusqlite::{ffi, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod course_repo;
pub mod instructor_repo;
pub mod lesson_repo;
pub mod lock_repo;
pub mod module_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from catalog repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Target row does not exist.
    NotFound(EntityKind, i64),
    /// A `UNIQUE` constraint rejected the write.
    UniqueViolation(String),
    /// A `FOREIGN KEY` constraint rejected the write.
    ForeignKeyViolation(String),
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(kind, id) => write!(f, "{kind} not found: {id}"),
            Self::UniqueViolation(message) => write!(f, "unique constraint failed: {message}"),
            Self::ForeignKeyViolation(message) => {
                write!(f, "foreign key constraint failed: {message}")
            }
            Self::InvalidData(message) => write!(f, "invalid catalog data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "catalog repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "catalog repository requires table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        match value {
            DbError::Sqlite(err) => err.into(),
            other => Self::Db(other),
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(failure, message) = &value {
            let detail = || message.clone().unwrap_or_else(|| failure.to_string());
            match failure.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    return Self::UniqueViolation(detail());
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    return Self::ForeignKeyViolation(detail());
                }
                _ => {}
            }
        }
        Self::Db(DbError::Sqlite(value))
    }
}

const CATALOG_TABLES: &[&str] = &["instructores", "cursos", "modulos", "lecciones"];

/// Verifies the connection is migrated and carries every catalog table.
pub fn ensure_catalog_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in CATALOG_TABLES {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn parse_published_flag(value: i64, column: &'static str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid is_published value `{other}` in {column}"
        ))),
    }
}

fn ensure_changed(changed: usize, kind: EntityKind, id: i64) -> RepoResult<()> {
    if changed == 0 {
        return Err(RepoError::NotFound(kind, id));
    }
    Ok(())
}
