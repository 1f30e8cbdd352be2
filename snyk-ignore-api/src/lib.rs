//! # Snyk Ignore API Client
//!
//! Provides the Snyk v1 REST API integration used to ignore issues, with
//! token authentication and bounded retries when the API rate limits.

pub mod auth;
mod client;
pub mod consts;
mod endpoints;
pub mod models;
pub mod retry;

// Re-export the client
pub use client::{SnykClient, create_snyk_client};
// Re-export models
pub use models::{IgnorePayload, IgnoreRequest, IgnoreResponse, SnykAuth};
