//! # courses-rest - Course REST API
//!
//! This crate serves the course resource over HTTP: list, retrieve, filter,
//! create, update, patch and delete, plus a small student resource and the
//! operational probes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use courses_rest::{create_app, ServerConfig};
//! use courses_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Create a storage backend
//!     let backend = SqliteBackend::open("courses.db")?;
//!     backend.init_schema()?;
//!
//!     // Create the Axum application
//!     let app = create_app(backend);
//!
//!     // Start the server
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern | Success |
//! |------------|-------------|-------------|---------|
//! | list | GET | `/api/v1/courses/?id=&name=` | 200 |
//! | create | POST | `/api/v1/courses/` | 201 |
//! | read | GET | `/api/v1/courses/{id}/` | 200 |
//! | update | PUT | `/api/v1/courses/{id}/` | 200 |
//! | patch | PATCH | `/api/v1/courses/{id}/` | 200 |
//! | delete | DELETE | `/api/v1/courses/{id}/` | 204 |
//! | students | GET/POST | `/api/v1/students/` | 200/201 |
//! | student | GET | `/api/v1/students/{id}/` | 200 |
//! | health | GET | `/health`, `/_liveness`, `/_readiness` | 200 |
//!
//! ## Error Handling
//!
//! Errors are JSON objects with an appropriate status code:
//!
//! | HTTP Status | Body | Description |
//! |-------------|------|-------------|
//! | 400 | `{"name": ["..."]}` | Field validation error |
//! | 400 | `{"detail": "..."}` | Malformed body |
//! | 404 | `{"detail": "Not found."}` | Record not found |
//! | 415 | `{"detail": "..."}` | Unsupported media type |
//! | 500 | `{"detail": "..."}` | Internal server error |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers for each interaction
//! - [`extractors`] - Axum extractors for bodies, filters and ids
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use courses_persistence::core::{Backend, CourseStorage, StudentStorage};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
///
/// # Example
///
/// ```rust,ignore
/// use courses_rest::create_app;
/// use courses_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// backend.init_schema()?;
/// let app = create_app(backend);
/// ```
pub fn create_app<S>(storage: S) -> Router
where
    S: Backend + CourseStorage + StudentStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up the complete REST API with all handlers,
/// middleware, and configuration.
///
/// # Example
///
/// ```rust,ignore
/// use courses_rest::{create_app_with_config, ServerConfig};
/// use courses_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: Backend + CourseStorage + StudentStorage + Send + Sync + 'static,
{
    info!("Creating REST API server with backend: {}", storage.name());

    // Create application state
    let state = AppState::new(Arc::new(storage), config.clone());

    // Build the router with all routes
    let router =
        routing::create_routes(state).layer(DefaultBodyLimit::max(config.max_body_size));

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    let router = router.layer(service_builder);

    // Request ids wrap everything so the trace span and the response see them
    if config.enable_request_id {
        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
    } else {
        router
    }
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG`, when set,
/// takes precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "courses={level},courses_rest={level},courses_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
