//! Delete handler.
//!
//! `DELETE /api/v1/courses/{id}/`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use courses_persistence::core::CourseStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::RecordId;
use crate::state::AppState;

/// Handler for deleting a course.
///
/// Deletion is permanent; later reads of the id return 404.
///
/// # Response
///
/// - `204 No Content` - Course deleted
/// - `404 Not Found` - No course has this id
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    RecordId(id): RecordId,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id, "Processing course delete request");

    state.storage().delete_course(id).await?;

    debug!(id, "Course deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
