//! Record storage traits.
//!
//! This module defines [`CourseStorage`], the CRUD surface for courses, and
//! [`StudentStorage`], the smaller surface for students.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Course, CourseChanges, CourseFilter, NewCourse, NewStudent, Student};

/// Core storage trait for courses.
///
/// Every operation is atomic with respect to the store: a caller either sees
/// the whole effect of a write or none of it.
///
/// # Identifiers
///
/// Ids are assigned by the backend on [`create_course`](Self::create_course),
/// are stable for the lifetime of the record and are never reused after a
/// delete.
///
/// # Example
///
/// ```ignore
/// use courses_persistence::core::CourseStorage;
/// use courses_persistence::types::{CourseChanges, CourseFilter, NewCourse};
///
/// async fn example<S: CourseStorage>(storage: &S) -> Result<(), StorageError> {
///     let created = storage.create_course(NewCourse::new("Rust")?).await?;
///
///     let changes = CourseChanges::new().with_name("Advanced Rust")?;
///     let updated = storage.update_course(created.id, changes).await?;
///     assert_eq!(updated.name, "Advanced Rust");
///
///     let found = storage
///         .list_courses(&CourseFilter::new().with_name("Advanced Rust"))
///         .await?;
///     assert_eq!(found.len(), 1);
///
///     storage.delete_course(created.id).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait CourseStorage: Send + Sync {
    /// Creates a new course and returns it with its assigned id.
    async fn create_course(&self, course: NewCourse) -> StorageResult<Course>;

    /// Reads a course by id.
    ///
    /// Returns `None` if no course has that id.
    async fn read_course(&self, id: i64) -> StorageResult<Option<Course>>;

    /// Lists the courses matching the filter, in creation order.
    async fn list_courses(&self, filter: &CourseFilter) -> StorageResult<Vec<Course>>;

    /// Applies changes to an existing course and returns the result.
    ///
    /// An empty change set returns the course unchanged.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the course doesn't exist
    async fn update_course(&self, id: i64, changes: CourseChanges) -> StorageResult<Course>;

    /// Permanently deletes a course.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If the course doesn't exist
    async fn delete_course(&self, id: i64) -> StorageResult<()>;

    /// Counts all stored courses.
    async fn count_courses(&self) -> StorageResult<u64>;

    /// Checks if a course exists.
    async fn course_exists(&self, id: i64) -> StorageResult<bool> {
        Ok(self.read_course(id).await?.is_some())
    }
}

/// Storage trait for students.
#[async_trait]
pub trait StudentStorage: Send + Sync {
    /// Creates a new student and returns it with its assigned id.
    async fn create_student(&self, student: NewStudent) -> StorageResult<Student>;

    /// Reads a student by id.
    async fn read_student(&self, id: i64) -> StorageResult<Option<Student>>;

    /// Lists all students in creation order.
    async fn list_students(&self) -> StorageResult<Vec<Student>>;
}
