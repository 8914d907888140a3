//! Record id extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::RestError;

/// Axum extractor for the `{id}` path segment of an item endpoint.
///
/// Ids are integers; anything else cannot name a record, so it is rejected
/// as not found rather than as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Parses an id from its path form.
    pub fn parse(raw: &str) -> Result<Self, RestError> {
        raw.parse::<i64>()
            .map(RecordId)
            .map_err(|_| RestError::not_found("Record", raw))
    }
}

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| RestError::not_found("Record", ""))?;

        RecordId::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(RecordId::parse("42").unwrap(), RecordId(42));
    }

    #[test]
    fn test_non_integer_is_not_found() {
        for raw in ["abc", "1.5", " 1", ""] {
            assert!(matches!(
                RecordId::parse(raw),
                Err(RestError::NotFound { .. })
            ));
        }
    }
}
