//! Core types for the persistence layer.
//!
//! This module provides the record types stored by the service and the
//! validated inputs used to create and change them:
//!
//! - [`Course`], [`NewCourse`], [`CourseChanges`], [`CourseFilter`] - Course records
//! - [`Student`], [`NewStudent`] - Student records
//!
//! Inputs are always built through constructors that validate their fields,
//! so a storage backend never sees a blank or over-long name.
//!
//! # Examples
//!
//! ## Creating a Course input
//!
//! ```
//! use courses_persistence::types::NewCourse;
//! use serde_json::json;
//!
//! let course = NewCourse::from_json(&json!({"name": "Rust for beginners"})).unwrap();
//! assert_eq!(course.name(), "Rust for beginners");
//!
//! // Blank names are rejected
//! assert!(NewCourse::from_json(&json!({"name": "   "})).is_err());
//! ```
//!
//! ## Filtering
//!
//! ```
//! use courses_persistence::types::{Course, CourseFilter};
//!
//! let filter = CourseFilter::new().with_id(5).with_name("Algebra");
//! let course = Course { id: 5, name: "Algebra".to_string() };
//! assert!(filter.matches(&course));
//! ```

mod course;
mod fields;
mod student;

pub use course::{Course, CourseChanges, CourseFilter, NewCourse};
pub use fields::MAX_NAME_LENGTH;
pub use student::{NewStudent, Student};
