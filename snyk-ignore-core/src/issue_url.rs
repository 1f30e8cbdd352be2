//! # Issue URL Parsing
//!
//! Extracts the organization, project and issue identifiers from Snyk issue
//! URLs such as
//! `https://app.snyk.io/org/my-org/project/1234abcd#issue-snyk%3Alic%3Apip%3Acommon-lib%3AUnknown`.
//!
//! Each identifier is located independently by its path marker, so a URL
//! missing one marker still yields the other two.

use std::fmt;

const ORG_MARKER: &str = "/org/";
const PROJECT_MARKER: &str = "/project/";
const ISSUE_MARKER: &str = "#issue-";

/// Identifies a single issue within a Snyk project.
///
/// Only constructed through [`IssueReference::parse`], which guarantees that
/// all three identifiers are present and usable as URL path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReference {
  org_id: String,
  project_id: String,
  issue_id: String,
}

impl IssueReference {
  /// Parse all three identifiers from an issue URL.
  ///
  /// Returns `None` when any of the organization, project or issue markers is
  /// missing or is followed by an empty, `.` or `..` value.
  pub fn parse(url: &str) -> Option<Self> {
    Some(Self {
      org_id: parse_org_id(url)?,
      project_id: parse_project_id(url)?,
      issue_id: parse_issue_id(url)?,
    })
  }

  pub fn org_id(&self) -> &str {
    &self.org_id
  }

  pub fn project_id(&self) -> &str {
    &self.project_id
  }

  /// The percent-decoded issue ID, e.g. `snyk:lic:pip:common-lib:Unknown`
  pub fn issue_id(&self) -> &str {
    &self.issue_id
  }
}

impl fmt::Display for IssueReference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "issue '{}' in org '{}' project '{}'",
      self.issue_id, self.org_id, self.project_id
    )
  }
}

/// Text following the first occurrence of `marker`, if any.
fn after_marker<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
  url.find(marker).map(|index| &url[index + marker.len()..])
}

/// Percent-decode `value`.
///
/// Malformed escape sequences are kept as-is and invalid UTF-8 is replaced,
/// so decoding never fails.
pub fn percent_decode(value: &str) -> String {
  String::from_utf8_lossy(&urlencoding::decode_binary(value.as_bytes())).into_owned()
}

/// Empty, `.` and `..` would vanish from an API path, so none is an identifier
fn is_path_segment(value: &str) -> bool {
  !matches!(value, "" | "." | "..")
}

/// An identifier kept in its URL form, valid both as written and decoded
fn encoded_identifier(value: &str) -> Option<String> {
  (is_path_segment(value) && is_path_segment(&percent_decode(value))).then(|| value.to_string())
}

/// Extract the organization ID: the path segment after `/org/`.
pub fn parse_org_id(url: &str) -> Option<String> {
  let rest = after_marker(url, ORG_MARKER)?;
  let segment = rest.split('/').next().unwrap_or_default();
  encoded_identifier(segment)
}

/// Extract the project ID: the text after `/project/`, cut at the first `#`
/// or `/`.
pub fn parse_project_id(url: &str) -> Option<String> {
  let rest = after_marker(url, PROJECT_MARKER)?;
  let end = rest.find(['#', '/']).unwrap_or(rest.len());
  encoded_identifier(&rest[..end])
}

/// Extract the issue ID: everything after `#issue-`, percent-decoded.
pub fn parse_issue_id(url: &str) -> Option<String> {
  let decoded = percent_decode(after_marker(url, ISSUE_MARKER)?);
  is_path_segment(&decoded).then_some(decoded)
}
