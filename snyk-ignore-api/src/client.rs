//! # Snyk HTTP Client
//!
//! HTTP client for the Snyk v1 REST API, holding the token used for every
//! request and the API base URL.

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use snyk_ignore_core::{IssueReference, percent_decode};
use url::Url;

use crate::consts::DEFAULT_API_URL;
use crate::models::SnykAuth;

/// Represents a Snyk API client
pub struct SnykClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: SnykAuth,
}

impl SnykClient {
  /// Create a new Snyk client against the public API
  pub fn new(auth: SnykAuth) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: DEFAULT_API_URL.to_string(),
      auth,
    }
  }

  /// Point the client at another API base URL, e.g. a regional or mock server
  pub fn with_base_url(mut self, base_url: &str) -> Self {
    self.base_url = base_url.trim_end_matches('/').to_string();
    self
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Build `{base}/org/{org}/project/{project}/ignore/{issue}`.
  ///
  /// The identifiers are appended as path segments, so characters such as
  /// `/`, `#` or `?` in an issue ID are escaped while `:` is kept as-is.
  /// Organization and project IDs keep their URL form and are decoded first
  /// so their escapes are not escaped twice.
  pub(crate) fn ignore_url(&self, reference: &IssueReference) -> Result<Url> {
    let mut url = Url::parse(&self.base_url).with_context(|| format!("Invalid Snyk API URL '{}'", self.base_url))?;
    let org_id = percent_decode(reference.org_id());
    let project_id = percent_decode(reference.project_id());

    url
      .path_segments_mut()
      .map_err(|()| anyhow!("Snyk API URL '{}' cannot be a base URL", self.base_url))?
      .pop_if_empty()
      .extend([
        "org",
        org_id.as_str(),
        "project",
        project_id.as_str(),
        "ignore",
        reference.issue_id(),
      ]);

    Ok(url)
  }
}

/// Create a Snyk client from an API token
pub fn create_snyk_client(token: &str) -> SnykClient {
  let auth = SnykAuth {
    token: token.to_string(),
  };

  SnykClient::new(auth)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn reference(url: &str) -> IssueReference {
    IssueReference::parse(url).unwrap()
  }

  /// Test that Snyk client can be created with a token
  #[test]
  fn test_snyk_client_creation() {
    let client = create_snyk_client("test_token");

    assert_eq!(client.base_url, "https://api.snyk.io/v1");
    assert_eq!(client.auth.token, "test_token");
  }

  #[test]
  fn test_ignore_url() -> Result<()> {
    let client = create_snyk_client("test_token");
    let url = client.ignore_url(&reference(
      "https://app.snyk.io/org/test-org/project/test-proj#issue-snyk%3Alic%3Apip%3Acommon-lib%3AUnknown",
    ))?;

    assert_eq!(
      url.as_str(),
      "https://api.snyk.io/v1/org/test-org/project/test-proj/ignore/snyk:lic:pip:common-lib:Unknown"
    );
    Ok(())
  }

  #[test]
  fn test_ignore_url_escapes_reserved_characters() -> Result<()> {
    let client = create_snyk_client("test_token").with_base_url("http://127.0.0.1:8080/");
    let url = client.ignore_url(&reference("https://app.snyk.io/org/o/project/p#issue-a%2Fb%23c%3Fd"))?;

    assert_eq!(url.as_str(), "http://127.0.0.1:8080/org/o/project/p/ignore/a%2Fb%23c%3Fd");
    Ok(())
  }

  #[test]
  fn test_ignore_url_does_not_double_escape_org_and_project() -> Result<()> {
    let client = create_snyk_client("test_token").with_base_url("http://127.0.0.1:8080");
    let url = client.ignore_url(&reference("https://app.snyk.io/org/o%20x/project/p%3Aq#issue-i"))?;

    assert_eq!(url.as_str(), "http://127.0.0.1:8080/org/o%20x/project/p:q/ignore/i");
    Ok(())
  }

  #[test]
  fn test_ignore_url_keeps_dots_inside_issue_id() -> Result<()> {
    let client = create_snyk_client("test_token").with_base_url("http://127.0.0.1:8080");
    let url = client.ignore_url(&reference("https://app.snyk.io/org/o/project/p#issue-a..b"))?;

    assert_eq!(url.as_str(), "http://127.0.0.1:8080/org/o/project/p/ignore/a..b");
    Ok(())
  }

  #[test]
  fn test_dot_segment_issue_ids_never_reach_the_url() {
    for url in [
      "https://app.snyk.io/org/o%20x/project/p#issue-..",
      "https://app.snyk.io/org/o/project/p#issue-.",
      "https://app.snyk.io/org/o/project/p#issue-%2E%2E",
      "https://app.snyk.io/org/../project/p#issue-i",
    ] {
      assert!(IssueReference::parse(url).is_none(), "{url}");
    }
  }
}
