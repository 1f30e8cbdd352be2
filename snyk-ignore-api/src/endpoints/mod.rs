//! # Snyk API Endpoints
//!
//! Endpoint implementations for the Snyk v1 REST API resources used by the
//! tool.

pub mod ignore;
