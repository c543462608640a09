//! SQLite storage bootstrap, schema migrations and transaction scope.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the course catalog.
//! - Apply schema migrations in deterministic order.
//! - Run one unit of work inside a single transaction: immediate for
//!   writes, deferred for reads.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write catalog data before migrations succeed.
//! - Foreign keys are enforced on every returned connection.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod scope;

pub use open::{open_db, open_db_in_memory};
pub use scope::{run_in_transaction, run_read_transaction};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
