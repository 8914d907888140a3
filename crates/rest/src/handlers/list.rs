//! List handler.
//!
//! `GET /api/v1/courses/`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use courses_persistence::core::CourseStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::CourseQuery;
use crate::state::AppState;

/// Handler for listing courses.
///
/// Returns every course matching the optional `id` and `name` query
/// parameters as a JSON array, in creation order. There is no pagination
/// and no match is not an error: the array is simply empty.
///
/// # Response
///
/// - `200 OK` - Array of `{"id", "name"}` objects
/// - `400 Bad Request` - `id` is not an integer
///
/// # Example
///
/// ```http
/// GET /api/v1/courses/?id=3&name=Algebra HTTP/1.1
/// ```
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    CourseQuery(filter): CourseQuery,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id = ?filter.id, name = ?filter.name, "Processing course list request");

    let courses = state.storage().list_courses(&filter).await?;

    debug!(count = courses.len(), "Courses listed");

    Ok(Json(courses).into_response())
}
