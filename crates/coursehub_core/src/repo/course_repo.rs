//! Course repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and publish APIs over `cursos`.
//! - Assemble the nested course -> modules -> lessons read model.
//!
//! # Invariants
//! - Course reads always carry the joined instructor name (`LEFT JOIN`).
//! - Modules and lessons in a detail view are ordered by `id ASC`.
//! - Deleting a course removes its modules and lessons through
//!   `ON DELETE CASCADE`; no application-side cleanup runs.

use super::lesson_repo::parse_lesson_row;
use super::module_repo::parse_module_row;
use super::{ensure_changed, parse_published_flag, RepoResult};
use crate::model::course::{CourseDetail, CourseId, CourseSummary, CourseUpdate, NewCourse};
use crate::model::course_module::{ModuleId, ModuleWithLessons};
use crate::model::lesson::Lesson;
use crate::model::publish::PublishState;
use crate::model::EntityKind;
use rusqlite::{params, Connection, Row};
use std::collections::HashMap;

const COURSE_SELECT_SQL: &str = "SELECT
    c.id AS id,
    c.titulo AS titulo,
    c.descripcion AS descripcion,
    c.is_published AS is_published,
    c.instructor_id AS instructor_id,
    i.nombre AS instructor_nombre
FROM cursos c
LEFT JOIN instructores i ON i.id = c.instructor_id";

/// Repository interface for course operations.
pub trait CourseRepository {
    fn list_courses(&self) -> RepoResult<Vec<CourseSummary>>;
    fn get_course(&self, id: CourseId) -> RepoResult<Option<CourseSummary>>;
    /// Loads one course with all modules and lessons.
    fn get_course_detail(&self, id: CourseId) -> RepoResult<Option<CourseDetail>>;
    fn create_course(&self, course: &NewCourse) -> RepoResult<CourseId>;
    fn update_course(&self, id: CourseId, update: &CourseUpdate) -> RepoResult<()>;
    /// Latches the course into `Published`. Re-publishing succeeds.
    fn publish_course(&self, id: CourseId) -> RepoResult<()>;
    fn delete_course(&self, id: CourseId) -> RepoResult<()>;
}

/// SQLite-backed course repository.
pub struct SqliteCourseRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCourseRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CourseRepository for SqliteCourseRepository<'_> {
    fn list_courses(&self) -> RepoResult<Vec<CourseSummary>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COURSE_SELECT_SQL} ORDER BY c.id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_course_row(row)?);
        }
        Ok(items)
    }

    fn get_course(&self, id: CourseId) -> RepoResult<Option<CourseSummary>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COURSE_SELECT_SQL} WHERE c.id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_course_row(row)?));
        }
        Ok(None)
    }

    fn get_course_detail(&self, id: CourseId) -> RepoResult<Option<CourseDetail>> {
        let Some(course) = self.get_course(id)? else {
            return Ok(None);
        };

        let mut lessons_by_module = list_course_lessons(self.conn, id)?;

        let mut stmt = self.conn.prepare(
            "SELECT id, titulo, curso_id
             FROM modulos
             WHERE curso_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([id])?;
        let mut modules = Vec::new();
        while let Some(row) = rows.next()? {
            let module = parse_module_row(row)?;
            let lessons = lessons_by_module.remove(&module.id).unwrap_or_default();
            modules.push(ModuleWithLessons { module, lessons });
        }

        Ok(Some(CourseDetail { course, modules }))
    }

    fn create_course(&self, course: &NewCourse) -> RepoResult<CourseId> {
        self.conn.execute(
            "INSERT INTO cursos (titulo, descripcion, is_published, instructor_id)
             VALUES (?1, ?2, 0, ?3);",
            params![course.title, course.description, course.instructor_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_course(&self, id: CourseId, update: &CourseUpdate) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE cursos
             SET titulo = ?2,
                 descripcion = ?3,
                 instructor_id = ?4
             WHERE id = ?1;",
            params![id, update.title, update.description, update.instructor_id],
        )?;
        ensure_changed(changed, EntityKind::Course, id)
    }

    fn publish_course(&self, id: CourseId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE cursos SET is_published = ?2 WHERE id = ?1;",
            params![id, PublishState::Published.as_flag()],
        )?;
        ensure_changed(changed, EntityKind::Course, id)
    }

    fn delete_course(&self, id: CourseId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM cursos WHERE id = ?1;", [id])?;
        ensure_changed(changed, EntityKind::Course, id)
    }
}

/// Loads every lesson of one course in a single query, grouped by module.
fn list_course_lessons(
    conn: &Connection,
    course_id: CourseId,
) -> RepoResult<HashMap<ModuleId, Vec<Lesson>>> {
    let mut stmt = conn.prepare(
        "SELECT l.id AS id, l.titulo AS titulo, l.contenido AS contenido, l.modulo_id AS modulo_id
         FROM lecciones l
         INNER JOIN modulos m ON m.id = l.modulo_id
         WHERE m.curso_id = ?1
         ORDER BY l.modulo_id ASC, l.id ASC;",
    )?;
    let mut rows = stmt.query([course_id])?;
    let mut grouped: HashMap<ModuleId, Vec<Lesson>> = HashMap::new();
    while let Some(row) = rows.next()? {
        let lesson = parse_lesson_row(row)?;
        grouped.entry(lesson.module_id).or_default().push(lesson);
    }
    Ok(grouped)
}

fn parse_course_row(row: &Row<'_>) -> RepoResult<CourseSummary> {
    let is_published = parse_published_flag(row.get("is_published")?, "cursos.is_published")?;
    Ok(CourseSummary {
        id: row.get("id")?,
        title: row.get("titulo")?,
        description: row.get("descripcion")?,
        state: PublishState::from_flag(is_published),
        instructor_id: row.get("instructor_id")?,
        instructor_name: row.get("instructor_nombre")?,
    })
}
