//! Patch handler.
//!
//! `PATCH /api/v1/courses/{id}/`
//!
//! Supports several body formats, chosen by `Content-Type`:
//! - Partial fields - application/json (default) or application/x-www-form-urlencoded
//! - JSON Merge Patch (RFC 7386) - application/merge-patch+json
//! - JSON Patch (RFC 6902) - application/json-patch+json

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use courses_persistence::core::CourseStorage;
use courses_persistence::error::FieldErrors;
use courses_persistence::types::{Course, CourseChanges, NewCourse};
use serde_json::Value;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{Document, Payload, PayloadFormat, RecordId};
use crate::state::AppState;

use super::COURSE;

const READ_ONLY_ID: &str = "This field is read-only and cannot be changed.";

/// Handler for partially updating a course.
///
/// With a field body only the supplied fields change. A patch document is
/// applied to the current representation, and the result must still be a
/// valid course with the same id.
///
/// # Response
///
/// - `200 OK` - The updated course
/// - `400 Bad Request` - Invalid fields, malformed or failing patch document
/// - `404 Not Found` - No course has this id, checked before the body is read
/// - `415 Unsupported Media Type` - Unknown content type
///
/// # Example
///
/// ```http
/// PATCH /api/v1/courses/1/ HTTP/1.1
/// Content-Type: application/json-patch+json
///
/// [{"op": "replace", "path": "/name", "value": "Rust"}]
/// ```
pub async fn patch_handler<S>(
    State(state): State<AppState<S>>,
    RecordId(id): RecordId,
    payload: Payload,
) -> RestResult<Response>
where
    S: CourseStorage + Send + Sync,
{
    debug!(id, content_type = %payload.content_type(), "Processing course patch request");

    let existing = state
        .storage()
        .read_course(id)
        .await?
        .ok_or_else(|| RestError::not_found(COURSE, id))?;

    let changes = changes_from_document(&existing, payload.parse()?)?;
    let course = state.storage().update_course(id, changes).await?;

    debug!(id, "Course patched");

    Ok(Json(course).into_response())
}

/// Turns a PATCH body into validated changes to `existing`.
fn changes_from_document(existing: &Course, document: Document) -> RestResult<CourseChanges> {
    let format = document.format();
    let body = document.into_inner();

    if format.is_fields() {
        return Ok(CourseChanges::from_json(&body)?);
    }

    let patched = apply_patch(&existing.to_json(), format, body)?;

    if patched.get("id") != Some(&Value::from(existing.id)) {
        let mut errors = FieldErrors::new();
        errors.add("id", READ_ONLY_ID);
        return Err(RestError::Validation { errors });
    }

    Ok(CourseChanges::from(NewCourse::from_json(&patched)?))
}

/// Applies a patch document to a JSON representation.
fn apply_patch(current: &Value, format: PayloadFormat, document: Value) -> RestResult<Value> {
    let mut patched = current.clone();
    match format {
        PayloadFormat::JsonPatch => {
            let patch: json_patch::Patch =
                serde_json::from_value(document).map_err(|e| RestError::BadRequest {
                    message: format!("Invalid JSON Patch: {}", e),
                })?;

            json_patch::patch(&mut patched, &patch).map_err(|e| RestError::BadRequest {
                message: format!("Failed to apply JSON Patch: {}", e),
            })?;
        }
        PayloadFormat::MergePatch => {
            json_patch::merge(&mut patched, &document);
        }
        PayloadFormat::Json | PayloadFormat::Form => {
            return Err(RestError::BadRequest {
                message: "Body is not a patch document".to_string(),
            });
        }
    }
    Ok(patched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn course() -> Course {
        Course {
            id: 4,
            name: "Old".to_string(),
        }
    }

    #[test]
    fn test_field_payload_only_touches_supplied_fields() {
        let document = Document::new(PayloadFormat::Json, json!({}));
        let changes = changes_from_document(&course(), document).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn test_merge_patch() {
        let document = Document::new(PayloadFormat::MergePatch, json!({"name": "New"}));
        let changes = changes_from_document(&course(), document).unwrap();
        assert_eq!(changes.name(), Some("New"));
    }

    #[test]
    fn test_merge_patch_null_name_is_invalid() {
        let document = Document::new(PayloadFormat::MergePatch, json!({"name": null}));
        let err = changes_from_document(&course(), document).unwrap_err();
        assert!(matches!(err, RestError::Validation { .. }));
    }

    #[test]
    fn test_json_patch_replace() {
        let document = Document::new(
            PayloadFormat::JsonPatch,
            json!([{"op": "replace", "path": "/name", "value": "New"}]),
        );
        let changes = changes_from_document(&course(), document).unwrap();
        assert_eq!(changes.name(), Some("New"));
    }

    #[test]
    fn test_json_patch_cannot_change_id() {
        let document = Document::new(
            PayloadFormat::JsonPatch,
            json!([{"op": "replace", "path": "/id", "value": 5}]),
        );
        let err = changes_from_document(&course(), document).unwrap_err();
        assert_eq!(err.body(), json!({"id": [READ_ONLY_ID]}));
    }

    #[test]
    fn test_json_patch_failed_test_op_is_bad_request() {
        let document = Document::new(
            PayloadFormat::JsonPatch,
            json!([{"op": "test", "path": "/name", "value": "Other"}]),
        );
        let err = changes_from_document(&course(), document).unwrap_err();
        assert!(matches!(err, RestError::BadRequest { .. }));
    }

    #[test]
    fn test_malformed_json_patch_is_bad_request() {
        let document = Document::new(PayloadFormat::JsonPatch, json!({"op": "replace"}));
        let err = changes_from_document(&course(), document).unwrap_err();
        assert!(matches!(err, RestError::BadRequest { .. }));
    }
}
