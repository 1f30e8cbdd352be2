use std::time::Duration;

use serde::Serialize;
use snyk_ignore_core::{IssueReference, ReasonType};

/// Represents Snyk API authentication credentials
#[derive(Clone)]
pub struct SnykAuth {
  pub token: String,
}

impl SnykAuth {
  /// Value of the `Authorization` header
  pub fn header_value(&self) -> String {
    format!("token {}", self.token)
  }
}

/// Everything needed to ignore one issue
#[derive(Debug, Clone, PartialEq)]
pub struct IgnoreRequest {
  pub reference: IssueReference,
  pub reason: String,
  pub reason_type: ReasonType,
  pub disregard_if_fixable: bool,
  pub expires: Option<String>,
  pub ignore_path: String,
}

impl IgnoreRequest {
  /// The JSON body sent to the ignore endpoint
  pub fn payload(&self) -> IgnorePayload<'_> {
    IgnorePayload {
      reason: &self.reason,
      reason_type: &self.reason_type,
      disregard_if_fixable: self.disregard_if_fixable,
      ignore_path: &self.ignore_path,
      expires: self.expires.as_deref(),
    }
  }
}

/// Represents the ignore request payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnorePayload<'a> {
  pub reason: &'a str,
  pub reason_type: &'a ReasonType,
  pub disregard_if_fixable: bool,
  pub ignore_path: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expires: Option<&'a str>,
}

/// Final outcome of an ignore call, after any rate-limit retries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreResponse {
  /// HTTP status of the last response
  pub status: u16,
  /// Body text of the last response
  pub body: String,
  /// Number of POSTs sent
  pub attempts: u32,
  /// Backoff slept before each retry, in order
  pub waits: Vec<Duration>,
}

impl IgnoreResponse {
  /// The Snyk ignore endpoint answers 200 on success
  pub fn is_success(&self) -> bool {
    self.status == 200
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn request(expires: Option<&str>) -> IgnoreRequest {
    IgnoreRequest {
      reference: IssueReference::parse("https://app.snyk.io/org/o/project/p#issue-SNYK-JS-X-1").unwrap(),
      reason: "Not reachable".to_string(),
      reason_type: ReasonType::NotVulnerable,
      disregard_if_fixable: true,
      expires: expires.map(str::to_string),
      ignore_path: "*".to_string(),
    }
  }

  #[test]
  fn test_payload_without_expiry() {
    let body = serde_json::to_value(request(None).payload()).unwrap();
    assert_eq!(
      body,
      json!({
        "reason": "Not reachable",
        "reasonType": "not-vulnerable",
        "disregardIfFixable": true,
        "ignorePath": "*"
      })
    );
  }

  #[test]
  fn test_payload_with_expiry() {
    let body = serde_json::to_value(request(Some("2025-12-31")).payload()).unwrap();
    assert_eq!(body["expires"], "2025-12-31");
  }

  #[test]
  fn test_header_value() {
    let auth = SnykAuth {
      token: "abc123".to_string(),
    };
    assert_eq!(auth.header_value(), "token abc123");
  }
}
