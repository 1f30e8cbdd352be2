//! Authentication helpers for the Snyk client.
//!
//! The API token is read once from the environment at startup, before any
//! request is made.

use anyhow::{Context, Result, anyhow};
pub use snyk_ignore_core::consts::ENV_SNYK_TOKEN;
use tokio::runtime::{Builder, Runtime};

use crate::{SnykClient, create_snyk_client};

/// Read the Snyk API token from `$SNYK_TOKEN`.
pub fn get_snyk_token() -> Result<String> {
  read_token(ENV_SNYK_TOKEN)
}

fn read_token(var: &str) -> Result<String> {
  match std::env::var(var) {
    Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
    _ => Err(anyhow!("{var} environment variable not set")),
  }
}

/// Creates an authenticated Snyk client using the token from the environment.
pub fn create_snyk_client_from_env(base_url: &str) -> Result<SnykClient> {
  let token = get_snyk_token().context("Failed to get Snyk credentials")?;

  Ok(create_snyk_client(&token).with_base_url(base_url))
}

/// Creates a single-threaded tokio runtime and an authenticated Snyk client.
///
/// Rows are processed strictly one after another, so the runtime never needs
/// more than the calling thread.
pub fn create_snyk_runtime_and_client(base_url: &str) -> Result<(Runtime, SnykClient)> {
  let client = create_snyk_client_from_env(base_url)?;
  let rt = Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;
  Ok((rt, client))
}
