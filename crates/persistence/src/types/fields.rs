//! Field-level parsing shared by the record inputs.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::{FieldErrors, ValidationError};

/// Maximum number of characters allowed in a name.
pub const MAX_NAME_LENGTH: usize = 256;

pub(crate) const REQUIRED: &str = "This field is required.";
pub(crate) const BLANK: &str = "This field may not be blank.";
pub(crate) const NOT_A_STRING: &str = "Not a valid string.";
pub(crate) const BAD_DATE: &str =
    "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";

/// Field name used for errors that concern the whole body.
pub(crate) const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Borrows the body as a JSON object.
pub(crate) fn as_object<'a>(
    value: &'a Value,
    resource_type: &str,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.add(
            NON_FIELD_ERRORS,
            format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_type_name(value)
            ),
        );
        ValidationError::InvalidFields {
            resource_type: resource_type.to_string(),
            errors,
        }
    })
}

/// Checks a name value, returning the accepted name.
///
/// Surrounding whitespace is stripped before the checks and is not stored.
pub(crate) fn check_name(name: &str, errors: &mut FieldErrors) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        errors.add("name", BLANK);
        return None;
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        errors.add(
            "name",
            format!(
                "Ensure this field has no more than {} characters.",
                MAX_NAME_LENGTH
            ),
        );
        return None;
    }
    Some(name.to_string())
}

/// Reads the `name` field of a body.
///
/// Returns `None` both when the field is absent (recording an error only if
/// `required`) and when it is invalid.
pub(crate) fn read_name(
    body: &Map<String, Value>,
    required: bool,
    errors: &mut FieldErrors,
) -> Option<String> {
    match body.get("name") {
        None => {
            if required {
                errors.add("name", REQUIRED);
            }
            None
        }
        Some(Value::Null) => {
            errors.add("name", "This field may not be null.");
            None
        }
        Some(Value::String(name)) => check_name(name, errors),
        Some(_) => {
            errors.add("name", NOT_A_STRING);
            None
        }
    }
}

/// Reads an optional date field in `YYYY-MM-DD` form.
pub(crate) fn read_date(
    body: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.add(field, BAD_DATE);
                None
            }
        },
        Some(_) => {
            errors.add(field, BAD_DATE);
            None
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
