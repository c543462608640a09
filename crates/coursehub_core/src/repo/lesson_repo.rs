//! Lesson repository contracts and SQLite implementation.

use super::{ensure_changed, RepoResult};
use crate::model::course_module::ModuleId;
use crate::model::lesson::{Lesson, LessonFields, LessonId};
use crate::model::EntityKind;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Repository interface for lesson operations.
pub trait LessonRepository {
    fn get_lesson(&self, id: LessonId) -> RepoResult<Option<Lesson>>;
    fn list_lessons(&self, module_id: ModuleId) -> RepoResult<Vec<Lesson>>;
    fn create_lesson(&self, module_id: ModuleId, fields: &LessonFields) -> RepoResult<LessonId>;
    /// Replaces title and content; absent content is stored as `NULL`.
    fn update_lesson(&self, id: LessonId, fields: &LessonFields) -> RepoResult<()>;
    fn delete_lesson(&self, id: LessonId) -> RepoResult<()>;
}

/// SQLite-backed lesson repository.
pub struct SqliteLessonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLessonRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl LessonRepository for SqliteLessonRepository<'_> {
    fn get_lesson(&self, id: LessonId) -> RepoResult<Option<Lesson>> {
        let lesson = self
            .conn
            .query_row(
                "SELECT id, titulo, contenido, modulo_id FROM lecciones WHERE id = ?1;",
                [id],
                parse_lesson_row,
            )
            .optional()?;
        Ok(lesson)
    }

    fn list_lessons(&self, module_id: ModuleId) -> RepoResult<Vec<Lesson>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, titulo, contenido, modulo_id
             FROM lecciones
             WHERE modulo_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([module_id])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_lesson_row(row)?);
        }
        Ok(items)
    }

    fn create_lesson(&self, module_id: ModuleId, fields: &LessonFields) -> RepoResult<LessonId> {
        self.conn.execute(
            "INSERT INTO lecciones (titulo, contenido, modulo_id) VALUES (?1, ?2, ?3);",
            params![fields.title, fields.content, module_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_lesson(&self, id: LessonId, fields: &LessonFields) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE lecciones
             SET titulo = ?2,
                 contenido = ?3
             WHERE id = ?1;",
            params![id, fields.title, fields.content],
        )?;
        ensure_changed(changed, EntityKind::Lesson, id)
    }

    fn delete_lesson(&self, id: LessonId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM lecciones WHERE id = ?1;", [id])?;
        ensure_changed(changed, EntityKind::Lesson, id)
    }
}

pub(crate) fn parse_lesson_row(row: &Row<'_>) -> rusqlite::Result<Lesson> {
    Ok(Lesson {
        id: row.get("id")?,
        title: row.get("titulo")?,
        content: row.get("contenido")?,
        module_id: row.get("modulo_id")?,
    })
}
