//! API route configuration.
//!
//! Defines all routes for the course REST API.

use axum::{
    Router,
    routing::{MethodRouter, get},
};
use courses_persistence::core::{Backend, CourseStorage, StudentStorage};

use crate::handlers;
use crate::state::AppState;

/// Path prefix of the versioned API.
pub const API_PREFIX: &str = "/api/v1";

/// Creates all REST API routes.
///
/// Every API path is served both with and without its trailing slash.
///
/// # Routes
///
/// ## Operational
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Courses
/// - `GET /api/v1/courses/` - List (optional `id`, `name` filters)
/// - `POST /api/v1/courses/` - Create
/// - `GET /api/v1/courses/{id}/` - Read
/// - `PUT /api/v1/courses/{id}/` - Update
/// - `PATCH /api/v1/courses/{id}/` - Patch
/// - `DELETE /api/v1/courses/{id}/` - Delete
///
/// ## Students
/// - `GET /api/v1/students/` - List
/// - `POST /api/v1/students/` - Create
/// - `GET /api/v1/students/{id}/` - Read
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: Backend + CourseStorage + StudentStorage + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .nest(API_PREFIX, api_routes::<S>())
        .with_state(state)
}

/// Creates the routes under [`API_PREFIX`], without state.
pub fn api_routes<S>() -> Router<AppState<S>>
where
    S: CourseStorage + StudentStorage + Send + Sync + 'static,
{
    let courses: MethodRouter<AppState<S>> =
        get(handlers::list_handler::<S>).post(handlers::create_handler::<S>);
    let course = get(handlers::read_handler::<S>)
        .put(handlers::update_handler::<S>)
        .patch(handlers::patch_handler::<S>)
        .delete(handlers::delete_handler::<S>);

    let students: MethodRouter<AppState<S>> = get(handlers::list_students_handler::<S>)
        .post(handlers::create_student_handler::<S>);
    let student = get(handlers::read_student_handler::<S>);

    Router::new()
        .route("/courses", courses.clone())
        .route("/courses/", courses)
        .route("/courses/{id}", course.clone())
        .route("/courses/{id}/", course)
        .route("/students", students.clone())
        .route("/students/", students)
        .route("/students/{id}", student.clone())
        .route("/students/{id}/", student)
}
