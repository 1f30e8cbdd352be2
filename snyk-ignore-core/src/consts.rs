//! Constants shared across the snyk-ignore crates.

/// Environment variable holding the Snyk API token
pub const ENV_SNYK_TOKEN: &str = "SNYK_TOKEN";

/// Environment variable overriding the Snyk API base URL
pub const ENV_SNYK_API: &str = "SNYK_API";

/// Base URL of the Snyk v1 REST API
pub const DEFAULT_API_URL: &str = "https://api.snyk.io/v1";

/// CSV column that carries the issue URL
pub const ISSUE_URL_COLUMN: &str = "ISSUE_URL";

/// Ignore path applied when none is given
pub const DEFAULT_IGNORE_PATH: &str = "*";

/// Number of attempts made for a single ignore call
pub const DEFAULT_MAX_RETRIES: u32 = 3;
