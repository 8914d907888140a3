//! Database backend implementations.
//!
//! This module contains implementations of the storage traits for the
//! supported database backends. Each backend is gated behind a feature flag.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | SQLite | `sqlite` | Embedded database with in-memory and file modes |

#[cfg(feature = "sqlite")]
pub mod sqlite;
