//! CourseStorage and StudentStorage implementations for SQLite.

use async_trait::async_trait;
use rusqlite::{OptionalExtension, Row, ToSql, params};

use crate::core::{CourseStorage, StudentStorage};
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::{Course, CourseChanges, CourseFilter, NewCourse, NewStudent, Student};

use super::SqliteBackend;

const COURSE: &str = "Course";

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

fn not_found(resource_type: &str, id: i64) -> StorageError {
    StorageError::Resource(ResourceError::NotFound {
        resource_type: resource_type.to_string(),
        id,
    })
}

fn course_from_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        birth_date: row.get(2)?,
    })
}

#[async_trait]
impl CourseStorage for SqliteBackend {
    async fn create_course(&self, course: NewCourse) -> StorageResult<Course> {
        let conn = self.get_connection()?;

        conn.execute("INSERT INTO courses (name) VALUES (?1)", params![course.name()])
            .map_err(|e| internal_error(format!("Failed to insert course: {}", e)))?;
        let id = conn.last_insert_rowid();

        tracing::debug!(id, "Created course");

        Ok(Course {
            id,
            name: course.name().to_string(),
        })
    }

    async fn read_course(&self, id: i64) -> StorageResult<Option<Course>> {
        let conn = self.get_connection()?;

        conn.query_row(
            "SELECT id, name FROM courses WHERE id = ?1",
            params![id],
            course_from_row,
        )
        .optional()
        .map_err(|e| internal_error(format!("Failed to read course: {}", e)))
    }

    async fn list_courses(&self, filter: &CourseFilter) -> StorageResult<Vec<Course>> {
        let conn = self.get_connection()?;

        let mut sql = String::from("SELECT id, name FROM courses");
        let mut conditions: Vec<String> = Vec::new();
        let mut values: Vec<&dyn ToSql> = Vec::new();

        if let Some(id) = &filter.id {
            values.push(id);
            conditions.push(format!("id = ?{}", values.len()));
        }
        if let Some(name) = &filter.name {
            values.push(name);
            conditions.push(format!("name = ?{}", values.len()));
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY id");

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| internal_error(format!("Failed to prepare course query: {}", e)))?;
        let courses = stmt
            .query_map(values.as_slice(), course_from_row)
            .map_err(|e| internal_error(format!("Failed to query courses: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| internal_error(format!("Failed to read course row: {}", e)))?;

        Ok(courses)
    }

    async fn update_course(&self, id: i64, changes: CourseChanges) -> StorageResult<Course> {
        let mut conn = self.get_connection()?;
        let tx = conn
            .transaction()
            .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

        if let Some(name) = changes.name() {
            let updated = tx
                .execute(
                    "UPDATE courses SET name = ?1 WHERE id = ?2",
                    params![name, id],
                )
                .map_err(|e| internal_error(format!("Failed to update course: {}", e)))?;
            if updated == 0 {
                return Err(not_found(COURSE, id));
            }
        }

        let course = tx
            .query_row(
                "SELECT id, name FROM courses WHERE id = ?1",
                params![id],
                course_from_row,
            )
            .optional()
            .map_err(|e| internal_error(format!("Failed to read course: {}", e)))?
            .ok_or_else(|| not_found(COURSE, id))?;

        tx.commit()
            .map_err(|e| internal_error(format!("Failed to commit transaction: {}", e)))?;

        tracing::debug!(id, "Updated course");

        Ok(course)
    }

    async fn delete_course(&self, id: i64) -> StorageResult<()> {
        let conn = self.get_connection()?;

        let deleted = conn
            .execute("DELETE FROM courses WHERE id = ?1", params![id])
            .map_err(|e| internal_error(format!("Failed to delete course: {}", e)))?;

        if deleted == 0 {
            return Err(not_found(COURSE, id));
        }

        tracing::debug!(id, "Deleted course");

        Ok(())
    }

    async fn count_courses(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))
            .map_err(|e| internal_error(format!("Failed to count courses: {}", e)))?;

        Ok(count as u64)
    }
}

#[async_trait]
impl StudentStorage for SqliteBackend {
    async fn create_student(&self, student: NewStudent) -> StorageResult<Student> {
        let conn = self.get_connection()?;

        conn.execute(
            "INSERT INTO students (name, birth_date) VALUES (?1, ?2)",
            params![student.name(), student.birth_date()],
        )
        .map_err(|e| internal_error(format!("Failed to insert student: {}", e)))?;

        Ok(Student {
            id: conn.last_insert_rowid(),
            name: student.name().to_string(),
            birth_date: student.birth_date(),
        })
    }

    async fn read_student(&self, id: i64) -> StorageResult<Option<Student>> {
        let conn = self.get_connection()?;

        conn.query_row(
            "SELECT id, name, birth_date FROM students WHERE id = ?1",
            params![id],
            student_from_row,
        )
        .optional()
        .map_err(|e| internal_error(format!("Failed to read student: {}", e)))
    }

    async fn list_students(&self) -> StorageResult<Vec<Student>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare("SELECT id, name, birth_date FROM students ORDER BY id")
            .map_err(|e| internal_error(format!("Failed to prepare student query: {}", e)))?;
        let students = stmt
            .query_map([], student_from_row)
            .map_err(|e| internal_error(format!("Failed to query students: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| internal_error(format!("Failed to read student row: {}", e)))?;

        Ok(students)
    }
}
