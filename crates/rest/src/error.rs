//! Error types for the course REST API.
//!
//! This module defines all error types used throughout the REST API layer,
//! with automatic conversion to JSON error bodies.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are automatically mapped to
//! appropriate HTTP status codes and bodies:
//!
//! | Storage Error | HTTP Status | Body |
//! |--------------|-------------|------|
//! | NotFound | 404 | `{"detail": "Not found."}` |
//! | InvalidFields | 400 | `{"<field>": ["<message>"]}` |
//! | InvalidFilter | 400 | `{"<parameter>": ["<message>"]}` |
//! | BackendError | 500 | `{"detail": "<message>"}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use courses_persistence::error::{
    BackendError, FieldErrors, ResourceError, StorageError, ValidationError,
};
use serde_json::{Map, Value, json};
use std::fmt;

/// Body text for missing records.
pub const NOT_FOUND_DETAIL: &str = "Not found.";

/// The primary error type for REST API operations.
///
/// This enum provides semantic error types that map cleanly to HTTP status codes.
#[derive(Debug)]
pub enum RestError {
    /// Record not found (HTTP 404).
    NotFound {
        /// The record type (e.g., "Course").
        resource_type: String,
        /// The id as it appeared in the request path.
        id: String,
    },

    /// Field-level validation failure (HTTP 400).
    Validation {
        /// Messages keyed by field name.
        errors: FieldErrors,
    },

    /// Bad request - malformed body (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Creates a not-found error for a record type and id.
    pub fn not_found(resource_type: &str, id: impl ToString) -> Self {
        RestError::NotFound {
            resource_type: resource_type.to_string(),
            id: id.to_string(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Validation { .. } | RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the JSON body for this error.
    pub fn body(&self) -> Value {
        match self {
            RestError::NotFound { .. } => detail(NOT_FOUND_DETAIL),
            RestError::Validation { errors } => field_errors_body(errors),
            RestError::BadRequest { message }
            | RestError::InternalError { message } => detail(message),
            RestError::UnsupportedMediaType { content_type } => detail(&format!(
                "Unsupported media type \"{}\" in request.",
                content_type
            )),
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { resource_type, id } => {
                write!(f, "Resource not found: {}/{}", resource_type, id)
            }
            RestError::Validation { errors } => {
                write!(f, "Validation failed: {}", errors)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

fn detail(message: &str) -> Value {
    json!({ "detail": message })
}

/// Renders field errors as `{"field": ["message", ...]}`.
fn field_errors_body(errors: &FieldErrors) -> Value {
    let map: Map<String, Value> = errors
        .iter()
        .map(|(field, messages)| (field.to_string(), json!(messages)))
        .collect();
    Value::Object(map)
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { resource_type, id } => RestError::NotFound {
                resource_type,
                id: id.to_string(),
            },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::Validation {
            errors: err.field_errors(),
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("JSON parse error - {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RestError::not_found("Course", 123);
        assert_eq!(err.to_string(), "Resource not found: Course/123");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.body(), json!({"detail": "Not found."}));
    }

    #[test]
    fn test_validation_body_lists_messages_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("name", "This field is required.");
        let err = RestError::Validation { errors };

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body(), json!({"name": ["This field is required."]}));
    }

    #[test]
    fn test_unsupported_media_type_body() {
        let err = RestError::UnsupportedMediaType {
            content_type: "text/plain".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(
            err.body()["detail"],
            "Unsupported media type \"text/plain\" in request."
        );
    }

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let err: RestError = StorageError::Resource(ResourceError::NotFound {
            resource_type: "Course".to_string(),
            id: 9,
        })
        .into();
        assert!(matches!(err, RestError::NotFound { ref id, .. } if id == "9"));
    }

    #[test]
    fn test_filter_error_maps_to_parameter_field() {
        let err: RestError = ValidationError::InvalidFilter {
            parameter: "id".to_string(),
            message: "Enter a number.".to_string(),
        }
        .into();
        assert_eq!(err.body(), json!({"id": ["Enter a number."]}));
    }

    #[test]
    fn test_backend_errors_map_to_server_errors() {
        let internal: RestError = BackendError::MigrationError {
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let unavailable: RestError = BackendError::ConnectionFailed {
            backend_name: "sqlite".to_string(),
            message: "timed out".to_string(),
        }
        .into();
        assert_eq!(unavailable.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            unavailable.body()["detail"]
                .as_str()
                .unwrap()
                .contains("timed out")
        );
    }

    #[test]
    fn test_json_error_is_bad_request() {
        let parse_err = serde_json::from_str::<Value>("{").unwrap_err();
        let err: RestError = parse_err.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(
            err.body()["detail"]
                .as_str()
                .unwrap()
                .starts_with("JSON parse error")
        );
    }
}
