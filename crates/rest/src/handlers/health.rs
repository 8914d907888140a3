//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness endpoints for monitoring and
//! load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use courses_persistence::core::{Backend, CourseStorage};
use tracing::{debug, warn};

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET /health`
///
/// # Response
///
/// - `200 OK` - Server is healthy
/// - `503 Service Unavailable` - The storage backend failed its health check
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: Backend + Send + Sync,
{
    debug!("Processing health check request");

    let backend_name = state.storage().name();
    let timestamp = chrono::Utc::now().to_rfc3339();

    match state.storage().health_check().await {
        Ok(()) => {
            let body = serde_json::json!({
                "status": "healthy",
                "backend": backend_name,
                "timestamp": timestamp
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            warn!(backend = backend_name, error = %e, "Health check failed");
            let body = serde_json::json!({
                "status": "unhealthy",
                "backend": backend_name,
                "timestamp": timestamp,
                "error": e.to_string()
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET /_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// Counts courses to prove storage answers queries.
///
/// # HTTP Request
///
/// `GET /_readiness`
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: Backend + CourseStorage + Send + Sync,
{
    debug!("Processing readiness check request");

    let backend_name = state.storage().name();

    match state.storage().count_courses().await {
        Ok(count) => {
            let body = serde_json::json!({
                "status": "ready",
                "backend": backend_name,
                "checks": {
                    "storage": "ok",
                    "courses": count
                }
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            warn!(backend = backend_name, error = %e, "Readiness check failed");
            let body = serde_json::json!({
                "status": "not_ready",
                "backend": backend_name,
                "checks": {
                    "storage": e.to_string()
                }
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}
