//! Course filter extractor.
//!
//! Builds a [`CourseFilter`] from the `id` and `name` query parameters of a
//! list request.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use courses_persistence::types::CourseFilter;
use std::collections::HashMap;

use crate::error::RestError;

/// Axum extractor for the course list filter.
///
/// `id` must be an integer and `name` is matched exactly. Both are optional,
/// combine with AND, and are skipped when empty. Other parameters are
/// ignored.
///
/// # Example
///
/// ```rust,ignore
/// use courses_rest::extractors::CourseQuery;
///
/// async fn list_handler(CourseQuery(filter): CourseQuery) {
///     println!("filtering on {:?}", filter);
/// }
/// ```
#[derive(Debug, Default)]
pub struct CourseQuery(pub CourseFilter);

impl CourseQuery {
    /// Builds the filter from raw query parameters.
    pub fn from_map(params: &HashMap<String, String>) -> Result<Self, RestError> {
        let mut filter = CourseFilter::new();

        if let Some(id) = params.get("id").filter(|v| !v.is_empty()) {
            filter = filter.with_id(CourseFilter::parse_id(id)?);
        }

        if let Some(name) = params.get("name").filter(|v| !v.is_empty()) {
            filter = filter.with_name(name.as_str());
        }

        Ok(CourseQuery(filter))
    }

    /// Consumes the extractor and returns the filter.
    pub fn into_inner(self) -> CourseFilter {
        self.0
    }
}

impl<S> FromRequestParts<S> for CourseQuery
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: format!("Invalid query parameters: {}", e),
            })?;

        CourseQuery::from_map(&params)
    }
}
