//! Read handler.
//!
//! `GET /api/v1/courses/{id}/`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use courses_persistence::core::CourseStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::RecordId;
use crate::state::AppState;

use super::COURSE;

/// Handler for retrieving a single course.
///
/// # Response
///
/// - `200 OK` - The course as `{"id", "name"}`
/// - `404 Not Found` - No course has this id
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    RecordId(id): RecordId,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id, "Processing course read request");

    let course = state
        .storage()
        .read_course(id)
        .await?
        .ok_or_else(|| RestError::not_found(COURSE, id))?;

    Ok(Json(course).into_response())
}
