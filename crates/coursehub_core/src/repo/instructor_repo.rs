//! Instructor repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over `instructores`.
//! - Count published courses owned by an instructor for the delete rule.
//!
//! # Invariants
//! - Partial updates only write the columns a patch sets.
//! - Deleting an instructor leaves owned courses in place with
//!   `instructor_id = NULL` (`ON DELETE SET NULL`).

use super::{ensure_changed, RepoError, RepoResult};
use crate::model::instructor::{Instructor, InstructorId, InstructorPatch, NewInstructor};
use crate::model::EntityKind;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const INSTRUCTOR_SELECT_SQL: &str = "SELECT id, nombre, email FROM instructores";

/// Repository interface for instructor operations.
pub trait InstructorRepository {
    fn list_instructors(&self) -> RepoResult<Vec<Instructor>>;
    fn get_instructor(&self, id: InstructorId) -> RepoResult<Option<Instructor>>;
    fn create_instructor(&self, instructor: &NewInstructor) -> RepoResult<InstructorId>;
    fn update_instructor(&self, id: InstructorId, patch: &InstructorPatch) -> RepoResult<()>;
    fn count_published_courses(&self, id: InstructorId) -> RepoResult<u32>;
    fn delete_instructor(&self, id: InstructorId) -> RepoResult<()>;
}

/// SQLite-backed instructor repository.
pub struct SqliteInstructorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteInstructorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl InstructorRepository for SqliteInstructorRepository<'_> {
    fn list_instructors(&self) -> RepoResult<Vec<Instructor>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{INSTRUCTOR_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_instructor_row(row)?);
        }
        Ok(items)
    }

    fn get_instructor(&self, id: InstructorId) -> RepoResult<Option<Instructor>> {
        let instructor = self
            .conn
            .query_row(
                &format!("{INSTRUCTOR_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_instructor_row,
            )
            .optional()?;
        Ok(instructor)
    }

    fn create_instructor(&self, instructor: &NewInstructor) -> RepoResult<InstructorId> {
        self.conn.execute(
            "INSERT INTO instructores (nombre, email) VALUES (?1, ?2);",
            params![instructor.name, instructor.email],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_instructor(&self, id: InstructorId, patch: &InstructorPatch) -> RepoResult<()> {
        let assignments = patch.assignments();
        if assignments.is_empty() {
            return match self.get_instructor(id)? {
                Some(_) => Ok(()),
                None => Err(RepoError::NotFound(EntityKind::Instructor, id)),
            };
        }

        let set_clause = assignments
            .iter()
            .enumerate()
            .map(|(index, (column, _))| format!("{column} = ?{}", index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let mut bind_values: Vec<Value> = assignments
            .iter()
            .map(|(_, value)| Value::Text((*value).to_string()))
            .collect();
        bind_values.push(Value::Integer(id));
        let sql = format!(
            "UPDATE instructores SET {set_clause} WHERE id = ?{};",
            bind_values.len()
        );

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        ensure_changed(changed, EntityKind::Instructor, id)
    }

    fn count_published_courses(&self, id: InstructorId) -> RepoResult<u32> {
        let count = self.conn.query_row(
            "SELECT COUNT(*)
             FROM cursos
             WHERE instructor_id = ?1
               AND is_published = 1;",
            [id],
            |row| row.get::<_, u32>(0),
        )?;
        Ok(count)
    }

    fn delete_instructor(&self, id: InstructorId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM instructores WHERE id = ?1;", [id])?;
        ensure_changed(changed, EntityKind::Instructor, id)
    }
}

fn parse_instructor_row(row: &Row<'_>) -> rusqlite::Result<Instructor> {
    Ok(Instructor {
        id: row.get("id")?,
        name: row.get("nombre")?,
        email: row.get("email")?,
    })
}
