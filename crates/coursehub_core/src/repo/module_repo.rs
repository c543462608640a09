//! Module repository contracts and SQLite implementation.
//!
//! # Invariants
//! - A module row always references an existing course (`curso_id NOT NULL`).
//! - Deleting a module removes its lessons through `ON DELETE CASCADE`.

use super::lesson_repo::parse_lesson_row;
use super::{ensure_changed, RepoResult};
use crate::model::course::CourseId;
use crate::model::course_module::{CourseModule, ModuleId, ModuleWithLessons};
use crate::model::EntityKind;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Repository interface for module operations.
pub trait ModuleRepository {
    fn get_module(&self, id: ModuleId) -> RepoResult<Option<CourseModule>>;
    fn get_module_with_lessons(&self, id: ModuleId) -> RepoResult<Option<ModuleWithLessons>>;
    fn list_modules(&self, course_id: CourseId) -> RepoResult<Vec<CourseModule>>;
    fn create_module(&self, course_id: CourseId, title: &str) -> RepoResult<ModuleId>;
    fn rename_module(&self, id: ModuleId, title: &str) -> RepoResult<()>;
    fn delete_module(&self, id: ModuleId) -> RepoResult<()>;
}

/// SQLite-backed module repository.
pub struct SqliteModuleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteModuleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ModuleRepository for SqliteModuleRepository<'_> {
    fn get_module(&self, id: ModuleId) -> RepoResult<Option<CourseModule>> {
        let module = self
            .conn
            .query_row(
                "SELECT id, titulo, curso_id FROM modulos WHERE id = ?1;",
                [id],
                parse_module_row,
            )
            .optional()?;
        Ok(module)
    }

    fn get_module_with_lessons(&self, id: ModuleId) -> RepoResult<Option<ModuleWithLessons>> {
        let Some(module) = self.get_module(id)? else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(
            "SELECT id, titulo, contenido, modulo_id
             FROM lecciones
             WHERE modulo_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([id])?;
        let mut lessons = Vec::new();
        while let Some(row) = rows.next()? {
            lessons.push(parse_lesson_row(row)?);
        }

        Ok(Some(ModuleWithLessons { module, lessons }))
    }

    fn list_modules(&self, course_id: CourseId) -> RepoResult<Vec<CourseModule>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, titulo, curso_id
             FROM modulos
             WHERE curso_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([course_id])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_module_row(row)?);
        }
        Ok(items)
    }

    fn create_module(&self, course_id: CourseId, title: &str) -> RepoResult<ModuleId> {
        self.conn.execute(
            "INSERT INTO modulos (titulo, curso_id) VALUES (?1, ?2);",
            params![title, course_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn rename_module(&self, id: ModuleId, title: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE modulos SET titulo = ?2 WHERE id = ?1;",
            params![id, title],
        )?;
        ensure_changed(changed, EntityKind::Module, id)
    }

    fn delete_module(&self, id: ModuleId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM modulos WHERE id = ?1;", [id])?;
        ensure_changed(changed, EntityKind::Module, id)
    }
}

pub(crate) fn parse_module_row(row: &Row<'_>) -> rusqlite::Result<CourseModule> {
    Ok(CourseModule {
        id: row.get("id")?,
        title: row.get("titulo")?,
        course_id: row.get("curso_id")?,
    })
}
