//! SQLite lookup of ancestor course publish state.
//!
//! # Invariants
//! - Every query is a single read-only join along the ownership chain.
//! - No row means the target does not exist.

use super::{parse_published_flag, RepoResult};
use crate::model::publish::PublishState;
use crate::policy::{LockTarget, PublishLockLookup};
use rusqlite::{Connection, OptionalExtension};

/// SQLite-backed publish-lock lookup.
pub struct SqlitePublishLockLookup<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePublishLockLookup<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PublishLockLookup for SqlitePublishLockLookup<'_> {
    fn publish_state(&self, target: LockTarget) -> RepoResult<Option<PublishState>> {
        let sql = match target {
            LockTarget::Course(_) => {
                "SELECT c.is_published
                 FROM cursos c
                 WHERE c.id = ?1;"
            }
            LockTarget::Module(_) => {
                "SELECT c.is_published
                 FROM modulos m
                 INNER JOIN cursos c ON c.id = m.curso_id
                 WHERE m.id = ?1;"
            }
            LockTarget::Lesson(_) => {
                "SELECT c.is_published
                 FROM lecciones l
                 INNER JOIN modulos m ON m.id = l.modulo_id
                 INNER JOIN cursos c ON c.id = m.curso_id
                 WHERE l.id = ?1;"
            }
        };

        let flag: Option<i64> = self
            .conn
            .query_row(sql, [target.id()], |row| row.get(0))
            .optional()?;

        flag.map(|value| parse_published_flag(value, "cursos.is_published"))
            .transpose()
            .map(|flag| flag.map(PublishState::from_flag))
    }
}
