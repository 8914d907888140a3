//! HTTP request handlers.
//!
//! Course endpoint handlers, one per interaction:
//!
//! - [`list`] - List courses, optionally filtered by `id` and `name`
//! - [`read`] - Read a course by id
//! - [`create`] - Create a course
//! - [`update`] - Replace a course
//! - [`patch`] - Partially update a course
//! - [`delete`] - Delete a course
//!
//! And the supporting endpoints:
//!
//! - [`students`] - List, create and read students
//! - [`health`] - Health, liveness and readiness probes

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod patch;
pub mod read;
pub mod students;
pub mod update;

/// Record type name used in course errors.
pub(crate) const COURSE: &str = "Course";

/// Record type name used in student errors.
pub(crate) const STUDENT: &str = "Student";

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use list::list_handler;
pub use patch::patch_handler;
pub use read::read_handler;
pub use students::{create_student_handler, list_students_handler, read_student_handler};
pub use update::update_handler;
