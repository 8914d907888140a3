//! Update handler.
//!
//! `PUT /api/v1/courses/{id}/`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use courses_persistence::core::CourseStorage;
use courses_persistence::types::{CourseChanges, NewCourse};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{Payload, RecordId};
use crate::state::AppState;

use super::COURSE;

/// Handler for replacing a course.
///
/// Every writable field must be supplied, exactly as on create. The id in
/// the path wins over any id in the body.
///
/// # Response
///
/// - `200 OK` - The updated course
/// - `400 Bad Request` - Invalid body
/// - `404 Not Found` - No course has this id, checked before the body is read
/// - `415 Unsupported Media Type` - Unknown content type or a patch document
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    RecordId(id): RecordId,
    payload: Payload,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id, content_type = %payload.content_type(), "Processing course update request");

    if !state.storage().course_exists(id).await? {
        return Err(RestError::not_found(COURSE, id));
    }

    let replacement = NewCourse::from_json(&payload.into_fields()?)?;
    let course = state
        .storage()
        .update_course(id, CourseChanges::from(replacement))
        .await?;

    debug!(id, "Course updated");

    Ok(Json(course).into_response())
}
