//! # Snyk Ignore Endpoint
//!
//! `POST /org/{orgId}/project/{projectId}/ignore/{issueId}` with bounded
//! retries while the API answers `429 Too Many Requests`.

use anyhow::{Context, Result};
use reqwest::{StatusCode, header};
use tracing::{debug, info, instrument, trace, warn};

use crate::client::SnykClient;
use crate::consts::USER_AGENT;
use crate::models::{IgnoreRequest, IgnoreResponse};
use crate::retry::{attempts_allowed, retry_after_delay};

impl SnykClient {
  /// Ignore one issue, retrying up to `max_retries` attempts in total while
  /// rate limited.
  ///
  /// Every status other than 429 is returned as-is without retrying. When the
  /// budget runs out on a 429, that last response is returned.
  ///
  /// # Errors
  ///
  /// Returns an error only if a request cannot be sent or its body cannot be
  /// read.
  #[instrument(skip(self, request), fields(issue = %request.reference), level = "debug")]
  pub async fn ignore_issue(&self, request: &IgnoreRequest, max_retries: u32) -> Result<IgnoreResponse> {
    let url = self.ignore_url(&request.reference)?;
    let payload = request.payload();
    let allowed = attempts_allowed(max_retries);
    let mut waits = Vec::new();
    let mut attempts = 0;

    trace!("Snyk API URL: {}", url);

    loop {
      attempts += 1;
      info!("Ignoring {} (attempt {}/{})", request.reference, attempts, allowed);

      let response = self
        .client
        .post(url.clone())
        .header(header::AUTHORIZATION, self.auth.header_value())
        .header(header::USER_AGENT, USER_AGENT)
        .json(&payload)
        .send()
        .await
        .with_context(|| format!("POST {url} failed"))?;

      let status = response.status();
      debug!("Snyk API response status: {}", status);

      if status == StatusCode::TOO_MANY_REQUESTS && attempts < allowed {
        let delay = retry_after_delay(response.headers());
        warn!(
          "Rate limited by Snyk API, retrying in {}s ({} attempts left)",
          delay.as_secs(),
          allowed - attempts
        );
        waits.push(delay);
        tokio::time::sleep(delay).await;
        continue;
      }

      let body = response
        .text()
        .await
        .context("Failed to read Snyk API response body")?;
      trace!("Snyk API response body: {}", body);

      return Ok(IgnoreResponse {
        status: status.as_u16(),
        body,
        attempts,
        waits,
      });
    }
  }
}
