//! Course record types.
//!
//! A [`Course`] is the stored record. [`NewCourse`] and [`CourseChanges`]
//! are validated inputs for creating and changing one, and [`CourseFilter`]
//! selects records when listing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FieldErrors, ValidationError};

use super::fields::{as_object, check_name, read_name};

const RESOURCE_TYPE: &str = "Course";

/// A stored course.
///
/// The `id` is assigned by the backend on creation and never changes.
///
/// # Examples
///
/// ```
/// use courses_persistence::types::Course;
///
/// let course = Course { id: 1, name: "Databases".to_string() };
/// assert_eq!(course.to_json()["name"], "Databases");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Server-assigned identifier.
    pub id: i64,
    /// Human-readable course name.
    pub name: String,
}

impl Course {
    /// Returns the JSON representation (`{"id", "name"}`).
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
        })
    }
}

/// Validated input for creating a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    name: String,
}

impl NewCourse {
    /// Creates a course input from a name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is blank or too long.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let mut errors = FieldErrors::new();
        let name = check_name(&name, &mut errors);
        errors.into_result(RESOURCE_TYPE)?;
        Ok(Self {
            name: name.unwrap_or_default(),
        })
    }

    /// Builds a course input from a request body.
    ///
    /// `name` is required. Any `id` in the body is read-only and ignored, as
    /// are unknown fields.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let body = as_object(value, RESOURCE_TYPE)?;
        let mut errors = FieldErrors::new();
        let name = read_name(body, true, &mut errors);
        errors.into_result(RESOURCE_TYPE)?;
        Ok(Self {
            name: name.unwrap_or_default(),
        })
    }

    /// Returns the course name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Validated partial changes to an existing course.
///
/// Fields that are `None` are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseChanges {
    name: Option<String>,
}

impl CourseChanges {
    /// Creates an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is blank or too long.
    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let mut errors = FieldErrors::new();
        let name = check_name(&name, &mut errors);
        errors.into_result(RESOURCE_TYPE)?;
        self.name = name;
        Ok(self)
    }

    /// Builds a change set from a partial request body.
    ///
    /// Every field is optional; supplied fields are validated the same way
    /// as on creation.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let body = as_object(value, RESOURCE_TYPE)?;
        let mut errors = FieldErrors::new();
        let name = read_name(body, false, &mut errors);
        errors.into_result(RESOURCE_TYPE)?;
        Ok(Self { name })
    }

    /// Returns the new name, if one was supplied.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if the change set touches no field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

impl From<NewCourse> for CourseChanges {
    fn from(course: NewCourse) -> Self {
        Self {
            name: Some(course.name),
        }
    }
}

/// Exact-match filter over course fields.
///
/// Supplied criteria are combined with AND; an empty filter matches every
/// course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Match on the course id.
    pub id: Option<i64>,
    /// Match on the exact course name.
    pub name: Option<String>,
}

impl CourseFilter {
    /// Creates a filter that matches every course.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to a single id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Restricts the filter to an exact name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parses the `id` criterion from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidFilter`] when the value is not an
    /// integer.
    pub fn parse_id(value: &str) -> Result<i64, ValidationError> {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidFilter {
                parameter: "id".to_string(),
                message: "Enter a number.".to_string(),
            })
    }

    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }

    /// Returns true if the course satisfies every criterion.
    pub fn matches(&self, course: &Course) -> bool {
        self.id.is_none_or(|id| id == course.id)
            && self.name.as_deref().is_none_or(|name| name == course.name)
    }
}
