//! Core storage traits and abstractions.
//!
//! This module provides the foundational traits for the persistence layer:
//!
//! - [`Backend`] - Database driver lifecycle (schema, health)
//! - [`CourseStorage`] - Course CRUD operations
//! - [`StudentStorage`] - Student operations
//!
//! A complete backend implements all three; the REST layer bounds each
//! handler on only the traits it needs.

pub mod backend;
pub mod storage;

// Re-export main types
pub use backend::{Backend, BackendKind};
pub use storage::{CourseStorage, StudentStorage};
