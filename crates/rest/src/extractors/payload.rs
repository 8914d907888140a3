//! Request body extractor.
//!
//! Reads a record body sent as JSON, as an HTML form, or as a JSON Patch /
//! JSON Merge Patch document. The extractor only buffers the body; handlers
//! parse it once they know the target record exists.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::header,
};
use serde_json::{Map, Value};

use crate::error::{RestError, RestResult};

/// Content type assumed when a request does not send one.
const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// The format a request body was sent in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    /// `application/json`, also assumed when no content type is sent.
    Json,
    /// `application/x-www-form-urlencoded`.
    Form,
    /// `application/merge-patch+json` (RFC 7386).
    MergePatch,
    /// `application/json-patch+json` (RFC 6902).
    JsonPatch,
}

impl PayloadFormat {
    /// Picks the format for a `Content-Type` header value.
    ///
    /// Returns `None` for media types the API does not read.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime: mime::Mime = content_type.parse().ok()?;
        if mime.type_() != mime::APPLICATION {
            return None;
        }
        // `mime` splits a structured syntax suffix off the subtype
        match (mime.subtype().as_str(), mime.suffix().map(|s| s.as_str())) {
            ("json", None) => Some(PayloadFormat::Json),
            ("x-www-form-urlencoded", None) => Some(PayloadFormat::Form),
            ("merge-patch", Some("json")) => Some(PayloadFormat::MergePatch),
            ("json-patch", Some("json")) => Some(PayloadFormat::JsonPatch),
            _ => None,
        }
    }

    /// Returns the canonical media type of the format.
    pub fn media_type(self) -> &'static str {
        match self {
            PayloadFormat::Json => "application/json",
            PayloadFormat::Form => "application/x-www-form-urlencoded",
            PayloadFormat::MergePatch => "application/merge-patch+json",
            PayloadFormat::JsonPatch => "application/json-patch+json",
        }
    }

    /// Returns true for the plain field formats (JSON object or form).
    pub fn is_fields(self) -> bool {
        matches!(self, PayloadFormat::Json | PayloadFormat::Form)
    }
}

/// Axum extractor for record bodies.
///
/// Holds the raw body and its content type. Nothing is parsed until
/// [`Payload::parse`] or [`Payload::into_fields`] is called, so a handler can
/// answer 404 for a missing record before judging the body.
///
/// # Example
///
/// ```rust,ignore
/// use courses_rest::extractors::Payload;
///
/// async fn create_handler(payload: Payload) -> RestResult<()> {
///     let fields = payload.into_fields()?;
///     println!("name = {}", fields["name"]);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Payload {
    content_type: String,
    bytes: Bytes,
}

impl Payload {
    /// Creates a payload from a content type and a raw body.
    pub fn new(content_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Returns the `Content-Type` the body was sent with.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the body format, or 415 for an unsupported content type.
    pub fn format(&self) -> RestResult<PayloadFormat> {
        PayloadFormat::from_content_type(&self.content_type).ok_or_else(|| {
            RestError::UnsupportedMediaType {
                content_type: self.content_type.clone(),
            }
        })
    }

    /// Parses the body in its declared format.
    pub fn parse(&self) -> RestResult<Document> {
        let format = self.format()?;
        let body = parse_body(format, &self.bytes)?;
        Ok(Document::new(format, body))
    }

    /// Parses the body as a set of record fields.
    ///
    /// Patch documents are only meaningful for PATCH, so they are rejected
    /// here as an unsupported media type.
    pub fn into_fields(self) -> RestResult<Value> {
        let document = self.parse()?;
        if document.format().is_fields() {
            Ok(document.into_inner())
        } else {
            Err(RestError::UnsupportedMediaType {
                content_type: self.content_type,
            })
        }
    }
}

/// A parsed request body together with its format.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    format: PayloadFormat,
    body: Value,
}

impl Document {
    /// Creates a document from an already-parsed body.
    pub fn new(format: PayloadFormat, body: Value) -> Self {
        Self { format, body }
    }

    /// Returns the body format.
    pub fn format(&self) -> PayloadFormat {
        self.format
    }

    /// Returns a reference to the parsed body.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Consumes the document and returns the parsed body.
    pub fn into_inner(self) -> Value {
        self.body
    }
}

/// Parses a form body into a JSON object of string values.
///
/// When a key repeats, the last value wins.
fn parse_form(bytes: &[u8]) -> Value {
    let fields: Map<String, Value> = url::form_urlencoded::parse(bytes)
        .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
        .collect();
    Value::Object(fields)
}

/// Parses a body in the given format.
pub fn parse_body(format: PayloadFormat, bytes: &[u8]) -> RestResult<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(match format {
            PayloadFormat::JsonPatch => Value::Array(Vec::new()),
            _ => Value::Object(Map::new()),
        });
    }

    match format {
        PayloadFormat::Form => Ok(parse_form(bytes)),
        PayloadFormat::Json | PayloadFormat::MergePatch | PayloadFormat::JsonPatch => {
            Ok(serde_json::from_slice(bytes)?)
        }
    }
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Own the header value before the request is consumed
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        let bytes = Bytes::from_request(req, state).await?;

        Ok(Payload {
            content_type,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_content_type() {
        assert_eq!(
            PayloadFormat::from_content_type("application/json; charset=utf-8"),
            Some(PayloadFormat::Json)
        );
        assert_eq!(
            PayloadFormat::from_content_type("application/x-www-form-urlencoded"),
            Some(PayloadFormat::Form)
        );
        assert_eq!(
            PayloadFormat::from_content_type("application/merge-patch+json"),
            Some(PayloadFormat::MergePatch)
        );
        assert_eq!(
            PayloadFormat::from_content_type("application/json-patch+json; charset=utf-8"),
            Some(PayloadFormat::JsonPatch)
        );
        assert_eq!(PayloadFormat::from_content_type("text/plain"), None);
        assert_eq!(PayloadFormat::from_content_type("application/ld+json"), None);
        assert_eq!(PayloadFormat::from_content_type("not a mime"), None);
    }

    #[test]
    fn test_media_type_reads_back_as_same_format() {
        for format in [
            PayloadFormat::Json,
            PayloadFormat::Form,
            PayloadFormat::MergePatch,
            PayloadFormat::JsonPatch,
        ] {
            assert_eq!(
                PayloadFormat::from_content_type(format.media_type()),
                Some(format)
            );
        }
    }

    #[test]
    fn test_parse_form_body() {
        let body = parse_body(PayloadFormat::Form, "name=%D0%92%D1%8B+ok&x=1".as_bytes()).unwrap();
        assert_eq!(body, json!({"name": "Вы ok", "x": "1"}));
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(parse_body(PayloadFormat::Json, b"").unwrap(), json!({}));
        assert_eq!(parse_body(PayloadFormat::JsonPatch, b" ").unwrap(), json!([]));
    }

    #[test]
    fn test_invalid_json_is_bad_request() {
        let err = parse_body(PayloadFormat::Json, b"{\"name\":").unwrap_err();
        assert!(matches!(err, RestError::BadRequest { .. }));
    }

    #[test]
    fn test_payload_is_not_parsed_until_asked() {
        let payload = Payload::new("text/plain", "{\"name\":");
        assert_eq!(payload.content_type(), "text/plain");
        assert!(matches!(
            payload.parse(),
            Err(RestError::UnsupportedMediaType { .. })
        ));
    }

    #[test]
    fn test_merge_patch_payload_parses() {
        let payload = Payload::new("application/merge-patch+json", "{\"name\": \"A\"}");
        let document = payload.parse().unwrap();
        assert_eq!(document.format(), PayloadFormat::MergePatch);
        assert_eq!(document.body(), &json!({"name": "A"}));
    }

    #[test]
    fn test_patch_documents_are_not_fields() {
        let payload = Payload::new("application/json-patch+json", "[]");
        let err = payload.into_fields().unwrap_err();
        assert!(matches!(
            err,
            RestError::UnsupportedMediaType { ref content_type } if content_type == "application/json-patch+json"
        ));
    }
}
