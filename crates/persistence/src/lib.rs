//! Course Service Persistence Layer
//!
//! This crate stores the records served by the course REST API: courses and
//! a separate, unrelated student resource. Storage is abstracted behind async
//! traits so the HTTP layer never touches SQL directly.
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! courses-persistence = { version = "0.1", features = ["sqlite"] }
//! ```
//!
//! Available backend features:
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! # Architecture
//!
//! - [`types`] - Record types and validated inputs
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits and abstractions
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```no_run
//! use courses_persistence::backends::sqlite::SqliteBackend;
//! use courses_persistence::core::CourseStorage;
//! use courses_persistence::types::{CourseFilter, NewCourse};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let course = backend.create_course(NewCourse::new("Algebra")?).await?;
//! let found = backend
//!     .list_courses(&CourseFilter::new().with_name("Algebra"))
//!     .await?;
//! assert_eq!(found, vec![course]);
//! # Ok(())
//! # }
//! ```
//!
//! # Validation
//!
//! Inputs are validated when they are built, so storage backends only ever
//! receive well-formed names:
//!
//! ```
//! use courses_persistence::types::NewCourse;
//!
//! assert!(NewCourse::new("").is_err());
//! assert!(NewCourse::new("x".repeat(257)).is_err());
//! assert!(NewCourse::new("Вы устроитесь на работу").is_ok());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Course, CourseChanges, CourseFilter, NewCourse, NewStudent, Student};

// Re-export core traits
pub use core::{Backend, BackendKind, CourseStorage, StudentStorage};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
