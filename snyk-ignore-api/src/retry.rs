//! Rate-limit handling for the ignore endpoint.
//!
//! Snyk answers `429 Too Many Requests` with a `Retry-After` header giving the
//! number of seconds to wait. Only 429 responses are retried.

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use tracing::warn;

use crate::consts::DEFAULT_RETRY_AFTER;

/// Number of attempts allowed for a retry budget; a budget of zero still
/// makes one attempt.
pub const fn attempts_allowed(max_retries: u32) -> u32 {
  if max_retries == 0 { 1 } else { max_retries }
}

/// Delay requested by a rate-limited response.
///
/// Falls back to [`DEFAULT_RETRY_AFTER`] when the header is absent or is not
/// a whole number of seconds.
pub fn retry_after_delay(headers: &HeaderMap) -> Duration {
  let Some(value) = headers.get(RETRY_AFTER) else {
    return DEFAULT_RETRY_AFTER;
  };

  match value.to_str().ok().and_then(|text| text.trim().parse::<u64>().ok()) {
    Some(seconds) => Duration::from_secs(seconds),
    None => {
      warn!(
        "Ignoring malformed Retry-After header {:?}, waiting {}s",
        value,
        DEFAULT_RETRY_AFTER.as_secs()
      );
      DEFAULT_RETRY_AFTER
    }
  }
}

#[cfg(test)]
mod tests {
  use reqwest::header::HeaderValue;
  use test_case::test_case;

  use super::*;

  fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(RETRY_AFTER, HeaderValue::from_str(value).unwrap());
    headers
  }

  #[test]
  fn test_missing_header_uses_default() {
    assert_eq!(retry_after_delay(&HeaderMap::new()), Duration::from_secs(10));
  }

  #[test_case("5", 5 ; "seconds")]
  #[test_case(" 7 ", 7 ; "padded")]
  #[test_case("0", 0 ; "zero")]
  #[test_case("soon", 10 ; "non numeric")]
  #[test_case("-3", 10 ; "negative")]
  #[test_case("1.5", 10 ; "fractional")]
  #[test_case("Wed, 21 Oct 2015 07:28:00 GMT", 10 ; "http date")]
  fn test_retry_after_delay(value: &str, expected_secs: u64) {
    assert_eq!(retry_after_delay(&headers_with(value)), Duration::from_secs(expected_secs));
  }

  #[test_case(0, 1)]
  #[test_case(1, 1)]
  #[test_case(3, 3)]
  fn test_attempts_allowed(max_retries: u32, expected: u32) {
    assert_eq!(attempts_allowed(max_retries), expected);
  }
}
