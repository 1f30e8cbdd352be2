//! Per-row outcome lines and the end-of-run summary.

use snyk_ignore_core::{print_error, print_info, print_success, print_warning};

use crate::processor::{RowOutcome, RowStatus};

/// Human-readable line for one row
pub fn format_outcome(outcome: &RowOutcome) -> String {
  let target = outcome
    .reference
    .as_ref()
    .map_or_else(|| format!("row {}", outcome.row), ToString::to_string);

  match &outcome.status {
    RowStatus::Success => format!("Successfully ignored {target}."),
    RowStatus::Skipped(reason) => match &outcome.reference {
      Some(reference) => format!("Skipping row {}, {reference}: {reason}", outcome.row),
      None => format!("Skipping row {}: {reason}", outcome.row),
    },
    RowStatus::Failed { status, body } => {
      format!("Failed to ignore {target}. Status code: {status}, Response: {body}")
    }
    RowStatus::TransportError(error) => format!("Failed to ignore {target}: {error}"),
  }
}

/// Print one row's outcome with the matching status style
pub fn print_outcome(outcome: &RowOutcome) {
  let line = format_outcome(outcome);
  match outcome.status {
    RowStatus::Success => print_success(&line),
    RowStatus::Skipped(_) => print_warning(&line),
    RowStatus::Failed { .. } | RowStatus::TransportError(_) => print_error(&line),
  }
}

/// Counts of row outcomes for a whole run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
  pub succeeded: usize,
  pub skipped: usize,
  pub failed: usize,
}

impl RunSummary {
  pub fn from_outcomes(outcomes: &[RowOutcome]) -> Self {
    outcomes.iter().fold(Self::default(), |mut summary, outcome| {
      match outcome.status {
        RowStatus::Success => summary.succeeded += 1,
        RowStatus::Skipped(_) => summary.skipped += 1,
        RowStatus::Failed { .. } | RowStatus::TransportError(_) => summary.failed += 1,
      }
      summary
    })
  }
}

/// Print the summary line closing a run
pub fn print_summary(summary: &RunSummary) {
  print_info(&format!(
    "{} succeeded, {} skipped, {} failed",
    summary.succeeded, summary.skipped, summary.failed
  ));
}

#[cfg(test)]
mod tests {
  use snyk_ignore_core::IssueReference;

  use super::*;
  use crate::processor::SkipReason;

  fn outcome(row: usize, status: RowStatus) -> RowOutcome {
    RowOutcome {
      row,
      reference: IssueReference::parse("https://app.snyk.io/org/my-org/project/my-proj#issue-SNYK-PY-X-1"),
      status,
    }
  }

  #[test]
  fn test_format_success() {
    assert_eq!(
      format_outcome(&outcome(1, RowStatus::Success)),
      "Successfully ignored issue 'SNYK-PY-X-1' in org 'my-org' project 'my-proj'."
    );
  }

  #[test]
  fn test_format_failure() {
    let failed = RowStatus::Failed {
      status: 403,
      body: "Forbidden".to_string(),
    };
    assert_eq!(
      format_outcome(&outcome(2, failed)),
      "Failed to ignore issue 'SNYK-PY-X-1' in org 'my-org' project 'my-proj'. Status code: 403, Response: Forbidden"
    );
  }

  #[test]
  fn test_format_skipped() {
    let skipped = RowOutcome {
      row: 3,
      reference: None,
      status: RowStatus::Skipped(SkipReason::MissingUrl),
    };
    assert_eq!(format_outcome(&skipped), "Skipping row 3: missing ISSUE_URL");
  }

  #[test]
  fn test_format_skipped_names_the_issue() {
    assert_eq!(
      format_outcome(&outcome(5, RowStatus::Skipped(SkipReason::MissingReason))),
      "Skipping row 5, issue 'SNYK-PY-X-1' in org 'my-org' project 'my-proj': missing ignore text"
    );
  }

  #[test]
  fn test_format_transport_error_without_reference() {
    let errored = RowOutcome {
      row: 4,
      reference: None,
      status: RowStatus::TransportError("connection refused".to_string()),
    };
    assert_eq!(format_outcome(&errored), "Failed to ignore row 4: connection refused");
  }

  #[test]
  fn test_run_summary() {
    let outcomes = vec![
      outcome(1, RowStatus::Success),
      outcome(2, RowStatus::Skipped(SkipReason::MissingReason)),
      outcome(
        3,
        RowStatus::Failed {
          status: 429,
          body: String::new(),
        },
      ),
      outcome(4, RowStatus::TransportError("timeout".to_string())),
      outcome(5, RowStatus::Success),
    ];

    assert_eq!(
      RunSummary::from_outcomes(&outcomes),
      RunSummary {
        succeeded: 2,
        skipped: 1,
        failed: 2,
      }
    );
  }
}
