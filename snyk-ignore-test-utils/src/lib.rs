//! Test utilities shared across the snyk-ignore workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable isolation ([`EnvVarGuard`])
//! - Temporary CSV input files ([`CsvFileGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod csv;
pub mod env;

// Re-export commonly used items
pub use csv::CsvFileGuard;
pub use env::EnvVarGuard;
