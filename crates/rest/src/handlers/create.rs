//! Create handler.
//!
//! `POST /api/v1/courses/`

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use courses_persistence::core::CourseStorage;
use courses_persistence::types::NewCourse;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::Payload;
use crate::state::AppState;

/// Handler for creating a course.
///
/// The server assigns the id; an `id` in the body is ignored.
///
/// # Headers
///
/// - `Content-Type` - `application/json` or `application/x-www-form-urlencoded`
///
/// # Response
///
/// - `201 Created` - The new course, with a `Location` header
/// - `400 Bad Request` - Missing, blank or over-long name, or a malformed body
/// - `415 Unsupported Media Type` - Any other content type
///
/// # Example
///
/// ```http
/// POST /api/v1/courses/ HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "Вы устроитесь на работу"}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    payload: Payload,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(content_type = %payload.content_type(), "Processing course create request");

    let input = NewCourse::from_json(&payload.into_fields()?)?;
    let course = state.storage().create_course(input).await?;
    let location = state.item_url("courses", course.id);

    debug!(id = course.id, "Course created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(course),
    )
        .into_response())
}
