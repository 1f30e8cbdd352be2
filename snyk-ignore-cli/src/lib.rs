//! # Snyk Ignore CLI Library
//!
//! Command-line front end for bulk-ignoring Snyk issues: argument parsing,
//! the CSV row processor, and per-row outcome reporting.

pub mod cli;
pub mod processor;
pub mod report;
