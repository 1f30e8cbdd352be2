//! Constants for the snyk-ignore API client.

use std::time::Duration;

pub use snyk_ignore_core::consts::DEFAULT_API_URL;

/// User-Agent header value for the Snyk API client
pub const USER_AGENT: &str = concat!("snyk-ignore/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Wait applied when a 429 response carries no usable `Retry-After` header
pub const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(10);
