//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server construction and record factories

#![allow(dead_code)]

pub mod harness;
