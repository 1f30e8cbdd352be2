//! # Run Configuration
//!
//! The validated settings for a single bulk-ignore run. Validation happens
//! once, up front, so that configuration mistakes are reported before any CSV
//! row is processed.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use thiserror::Error;
use url::Url;

use crate::consts::{DEFAULT_IGNORE_PATH, DEFAULT_MAX_RETRIES};

/// Errors raised while building an [`IgnoreConfig`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("At least one of --text or --ignore-text-column must be provided")]
  MissingReasonSource,
  #[error("Invalid expiry '{0}': expected an ISO 8601 date (2025-12-31) or timestamp (2025-12-31T23:59:59Z)")]
  InvalidExpiry(String),
  #[error("Invalid API URL '{0}': expected an absolute http(s) URL")]
  InvalidApiUrl(String),
}

/// Classification sent as `reasonType` with every ignore.
///
/// The set is open: values other than the three documented by Snyk are passed
/// through untouched and left for the API to accept or reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonType {
  NotVulnerable,
  WontFix,
  TemporaryIgnore,
  Other(String),
}

impl ReasonType {
  pub fn as_str(&self) -> &str {
    match self {
      ReasonType::NotVulnerable => "not-vulnerable",
      ReasonType::WontFix => "wont-fix",
      ReasonType::TemporaryIgnore => "temporary-ignore",
      ReasonType::Other(value) => value,
    }
  }
}

impl FromStr for ReasonType {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(match s {
      "not-vulnerable" => ReasonType::NotVulnerable,
      "wont-fix" => ReasonType::WontFix,
      "temporary-ignore" => ReasonType::TemporaryIgnore,
      other => ReasonType::Other(other.to_string()),
    })
  }
}

impl fmt::Display for ReasonType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl Serialize for ReasonType {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

/// Settings for one bulk-ignore run
#[derive(Debug, Clone, PartialEq)]
pub struct IgnoreConfig {
  /// CSV file to read
  pub file: PathBuf,
  /// Static reason text applied to every row
  pub reason_text: Option<String>,
  /// Column holding per-row reason text
  pub reason_column: Option<String>,
  pub reason_type: ReasonType,
  /// Only ignore while no upgrade or patch is available
  pub disregard_if_fixable: bool,
  /// Expiry timestamp, sent verbatim
  pub expires: Option<String>,
  pub ignore_path: String,
  /// Attempts per ignore call when rate limited
  pub max_retries: u32,
}

impl IgnoreConfig {
  /// Create a configuration with defaults for everything but the file and
  /// reason type. Call [`IgnoreConfig::validate`] once the optional fields are
  /// filled in.
  pub fn new(file: impl Into<PathBuf>, reason_type: ReasonType) -> Self {
    Self {
      file: file.into(),
      reason_text: None,
      reason_column: None,
      reason_type,
      disregard_if_fixable: false,
      expires: None,
      ignore_path: DEFAULT_IGNORE_PATH.to_string(),
      max_retries: DEFAULT_MAX_RETRIES,
    }
  }

  /// Normalize and check the configuration.
  ///
  /// Blank reason text and column names count as absent, at least one reason
  /// source must remain, and an expiry must be an ISO 8601 date or timestamp.
  pub fn validate(mut self) -> Result<Self, ConfigError> {
    self.reason_text = self.reason_text.filter(|text| !text.trim().is_empty());
    self.reason_column = self
      .reason_column
      .map(|column| column.trim().to_string())
      .filter(|column| !column.is_empty());

    if self.reason_text.is_none() && self.reason_column.is_none() {
      return Err(ConfigError::MissingReasonSource);
    }

    if let Some(expires) = &self.expires {
      validate_expiry(expires)?;
    }

    Ok(self)
  }
}

/// Accept `YYYY-MM-DD`, a local `YYYY-MM-DDTHH:MM:SS` timestamp, or RFC 3339.
pub fn validate_expiry(value: &str) -> Result<(), ConfigError> {
  let value = value.trim();
  let valid = NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
    || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
    || DateTime::parse_from_rfc3339(value).is_ok();

  if valid {
    Ok(())
  } else {
    Err(ConfigError::InvalidExpiry(value.to_string()))
  }
}

/// Check an API base URL and strip any trailing slash.
pub fn parse_api_url(value: &str) -> Result<String, ConfigError> {
  let trimmed = value.trim().trim_end_matches('/');
  match Url::parse(trimmed) {
    Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(trimmed.to_string()),
    _ => Err(ConfigError::InvalidApiUrl(value.to_string())),
  }
}
