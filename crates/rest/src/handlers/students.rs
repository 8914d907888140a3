//! Student handlers.
//!
//! - `GET /api/v1/students/`
//! - `POST /api/v1/students/`
//! - `GET /api/v1/students/{id}/`

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use courses_persistence::core::StudentStorage;
use courses_persistence::types::NewStudent;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{Payload, RecordId};
use crate::state::AppState;

use super::STUDENT;

/// Handler for listing students in creation order.
pub async fn list_students_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: StudentStorage + Send + Sync,
{
    debug!("Processing student list request");

    let students = state.storage().list_students().await?;
    Ok(Json(students).into_response())
}

/// Handler for creating a student.
///
/// # Response
///
/// - `201 Created` - `{"id", "name", "birth_date"}` with a `Location` header
/// - `400 Bad Request` - Invalid name or a `birth_date` not in `YYYY-MM-DD` form
pub async fn create_student_handler<S>(
    State(state): State<AppState<S>>,
    payload: Payload,
) -> RestResult<Response>
where
    S: StudentStorage + Send + Sync,
{
    debug!(content_type = %payload.content_type(), "Processing student create request");

    let input = NewStudent::from_json(&payload.into_fields()?)?;
    let student = state.storage().create_student(input).await?;
    let location = state.item_url("students", student.id);

    debug!(id = student.id, "Student created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(student),
    )
        .into_response())
}

/// Handler for retrieving a single student.
pub async fn read_student_handler<S>(
    State(state): State<AppState<S>>,
    RecordId(id): RecordId,
) -> RestResult<Response>
where
    S: StudentStorage + Send + Sync,
{
    debug!(id, "Processing student read request");

    let student = state
        .storage()
        .read_student(id)
        .await?
        .ok_or_else(|| RestError::not_found(STUDENT, id))?;

    Ok(Json(student).into_response())
}
