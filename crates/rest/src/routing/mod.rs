//! Route configuration for the course REST API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod api_routes;

pub use api_routes::{API_PREFIX, api_routes, create_routes};
