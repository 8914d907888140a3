//! Student record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FieldErrors, ValidationError};

use super::fields::{as_object, read_date, read_name};

const RESOURCE_TYPE: &str = "Student";

/// A stored student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Server-assigned identifier.
    pub id: i64,
    /// Student name.
    pub name: String,
    /// Date of birth, if known.
    pub birth_date: Option<NaiveDate>,
}

/// Validated input for creating a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    name: String,
    birth_date: Option<NaiveDate>,
}

impl NewStudent {
    /// Builds a student input from a request body.
    ///
    /// `name` is required; `birth_date` is optional and must use the
    /// `YYYY-MM-DD` form.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let body = as_object(value, RESOURCE_TYPE)?;
        let mut errors = FieldErrors::new();
        let name = read_name(body, true, &mut errors);
        let birth_date = read_date(body, "birth_date", &mut errors);
        errors.into_result(RESOURCE_TYPE)?;
        Ok(Self {
            name: name.unwrap_or_default(),
            birth_date,
        })
    }

    /// Returns the student name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the date of birth.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_student_serializes_date_as_iso() {
        let student = Student {
            id: 7,
            name: "Ivan".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 31),
        };
        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value, json!({"id": 7, "name": "Ivan", "birth_date": "2000-01-31"}));
    }

    #[test]
    fn test_new_student_reports_every_invalid_field() {
        let err = NewStudent::from_json(&json!({"birth_date": "yesterday"})).unwrap_err();
        let fields = err.field_errors();
        assert!(fields.get("name").is_some());
        assert!(fields.get("birth_date").is_some());
    }

    #[test]
    fn test_new_student_without_birth_date() {
        let student = NewStudent::from_json(&json!({"name": "Olga"})).unwrap();
        assert_eq!(student.name(), "Olga");
        assert_eq!(student.birth_date(), None);
    }
}
