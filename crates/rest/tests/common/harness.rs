//! REST API test harness.
//!
//! Builds a test server over a fresh in-memory SQLite backend and provides
//! factories for seeding records directly through storage.

use std::sync::Arc;

use axum::body::Bytes;
use axum_test::{TestResponse, TestServer};
use courses_persistence::backends::sqlite::SqliteBackend;
use courses_persistence::core::{CourseStorage, StudentStorage};
use courses_persistence::types::{Course, NewCourse, NewStudent, Student};
use courses_rest::{AppState, ServerConfig};
use serde_json::{Value, json};

/// Base URL used for `Location` headers in tests.
pub const BASE_URL: &str = "http://localhost:8080";

/// Collection endpoint for courses.
pub const COURSES: &str = "/api/v1/courses/";

/// Collection endpoint for students.
pub const STUDENTS: &str = "/api/v1/students/";

/// Returns the item endpoint of a course.
pub fn course_url(id: i64) -> String {
    format!("{}{}/", COURSES, id)
}

/// Returns the item endpoint of a student.
pub fn student_url(id: i64) -> String {
    format!("{}{}/", STUDENTS, id)
}

/// Creates a fresh in-memory backend with its schema in place.
pub fn create_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");
    backend
}

/// Creates a test server sharing its backend with the test.
pub async fn create_test_server() -> (TestServer, Arc<SqliteBackend>) {
    let backend = Arc::new(create_backend());

    let config = ServerConfig {
        base_url: BASE_URL.to_string(),
        ..ServerConfig::for_testing()
    };

    let state = AppState::new(Arc::clone(&backend), config);
    let app = courses_rest::routing::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, backend)
}

/// Creates a test server over the full application, middleware included.
pub fn create_app_server(config: ServerConfig) -> TestServer {
    let app = courses_rest::create_app_with_config(create_backend(), config);
    TestServer::new(app).expect("Failed to create test server")
}

/// Creates `count` courses named `Course 0`, `Course 1`, ...
pub async fn course_factory(backend: &SqliteBackend, count: usize) -> Vec<Course> {
    let mut courses = Vec::with_capacity(count);
    for i in 0..count {
        let course = backend
            .create_course(NewCourse::new(format!("Course {}", i)).expect("valid name"))
            .await
            .expect("Failed to seed course");
        courses.push(course);
    }
    courses
}

/// Creates one course with the given name.
pub async fn seed_course(backend: &SqliteBackend, name: &str) -> Course {
    backend
        .create_course(NewCourse::new(name).expect("valid name"))
        .await
        .expect("Failed to seed course")
}

/// Creates `count` students, every other one with a birth date.
pub async fn students_factory(backend: &SqliteBackend, count: usize) -> Vec<Student> {
    let mut students = Vec::with_capacity(count);
    for i in 0..count {
        let body = if i % 2 == 0 {
            json!({"name": format!("Student {}", i), "birth_date": "2000-01-15"})
        } else {
            json!({"name": format!("Student {}", i)})
        };
        let student = backend
            .create_student(NewStudent::from_json(&body).expect("valid student"))
            .await
            .expect("Failed to seed student");
        students.push(student);
    }
    students
}

/// Sends a PATCH with a JSON document under an explicit content type.
pub async fn patch_with_content_type(
    server: &TestServer,
    path: &str,
    content_type: &str,
    body: &Value,
) -> TestResponse {
    let bytes = serde_json::to_vec(body).expect("serializable body");
    server
        .patch(path)
        .bytes(Bytes::from(bytes))
        .content_type(content_type)
        .await
}
