//! Axum extractors for course API requests.
//!
//! This module provides custom Axum extractors for the request shapes the
//! API reads:
//!
//! - [`Payload`] - Record bodies as JSON, form or patch documents
//! - [`CourseQuery`] - The `id` / `name` list filter
//! - [`RecordId`] - Integer ids from item paths

mod course_query;
mod payload;
mod record_id;

pub use course_query::CourseQuery;
pub use payload::{Document, Payload, PayloadFormat, parse_body};
pub use record_id::RecordId;
