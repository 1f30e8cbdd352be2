//! # CSV Row Processor
//!
//! Walks the rows of a CSV export once, in file order, and ignores the issue
//! named by each row's `ISSUE_URL`. A row that cannot be processed is reported
//! and skipped; it never stops the rows after it.

use std::fmt;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use snyk_ignore_api::{IgnoreRequest, SnykClient};
use snyk_ignore_core::consts::ISSUE_URL_COLUMN;
use snyk_ignore_core::{IgnoreConfig, IssueReference, print_warning};
use tracing::{debug, info, instrument, warn};

use crate::report::print_outcome;

/// Why a row was skipped without calling the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
  MissingUrl,
  UnparsableIdentifiers { url: String },
  MissingReason,
  MalformedRow(String),
}

impl fmt::Display for SkipReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SkipReason::MissingUrl => write!(f, "missing {ISSUE_URL_COLUMN}"),
      SkipReason::UnparsableIdentifiers { url } => {
        write!(f, "org, project or issue ID could not be parsed from '{url}'")
      }
      SkipReason::MissingReason => write!(f, "missing ignore text"),
      SkipReason::MalformedRow(error) => write!(f, "malformed CSV row ({error})"),
    }
  }
}

/// Result of processing a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowStatus {
  Success,
  Skipped(SkipReason),
  /// The API answered with a non-200 status
  Failed { status: u16, body: String },
  /// The request could not be sent at all
  TransportError(String),
}

/// Outcome of one CSV data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
  /// 1-based data row number, not counting the header
  pub row: usize,
  pub reference: Option<IssueReference>,
  pub status: RowStatus,
}

impl RowOutcome {
  fn skipped(row: usize, reference: Option<IssueReference>, reason: SkipReason) -> Self {
    Self {
      row,
      reference,
      status: RowStatus::Skipped(reason),
    }
  }
}

/// Header positions of the columns the processor reads
struct Columns {
  issue_url: Option<usize>,
  reason: Option<usize>,
}

impl Columns {
  fn locate(headers: &StringRecord, config: &IgnoreConfig) -> Self {
    let position = |name: &str| headers.iter().position(|header| header == name);

    let issue_url = position(ISSUE_URL_COLUMN);
    if issue_url.is_none() {
      warn!("CSV header has no {} column", ISSUE_URL_COLUMN);
    }

    let reason = config.reason_column.as_deref().and_then(position);
    if let (Some(column), None) = (&config.reason_column, reason) {
      warn!("CSV header has no '{}' column", column);
    }

    Self { issue_url, reason }
  }
}

/// Trimmed cell value; absent columns and short rows read as empty
fn cell(record: &StringRecord, index: Option<usize>) -> &str {
  index.and_then(|i| record.get(i)).unwrap_or_default().trim()
}

/// Combine the static reason text with a row's reason column value.
///
/// `column_text` is `None` when no reason column is configured. An empty
/// column value falls back to the static text alone. Returns `None` when
/// neither source yields any text.
pub fn compose_reason(static_text: Option<&str>, column_text: Option<&str>) -> Option<String> {
  match (static_text, column_text.filter(|text| !text.is_empty())) {
    (Some(base), Some(column)) => Some(format!("{base} {column}")),
    (None, Some(column)) => Some(column.to_string()),
    (Some(base), None) => Some(base.to_string()),
    (None, None) => None,
  }
}

/// Ignore every issue listed in the configured CSV file.
///
/// Each outcome is printed as soon as its row completes, and all outcomes are
/// returned in row order.
///
/// # Errors
///
/// Returns an error only if the file cannot be opened or its header row cannot
/// be read; per-row problems are reported as outcomes.
#[instrument(skip_all, fields(file = %config.file.display()))]
pub async fn process_csv(config: &IgnoreConfig, client: &SnykClient) -> Result<Vec<RowOutcome>> {
  let mut reader = ReaderBuilder::new()
    .flexible(true)
    .from_path(&config.file)
    .with_context(|| format!("Failed to open CSV file {}", config.file.display()))?;

  let headers = reader.headers().context("Failed to read CSV header row")?.clone();
  let columns = Columns::locate(&headers, config);
  debug!("CSV columns: {:?}", headers);

  let mut outcomes = Vec::new();
  for (index, record) in reader.records().enumerate() {
    let row = index + 1;
    let outcome = match record {
      Ok(record) => process_row(row, &record, &columns, config, client).await,
      Err(e) => RowOutcome::skipped(row, None, SkipReason::MalformedRow(e.to_string())),
    };

    print_outcome(&outcome);
    outcomes.push(outcome);
  }

  info!("Processed {} rows", outcomes.len());
  Ok(outcomes)
}

async fn process_row(
  row: usize,
  record: &StringRecord,
  columns: &Columns,
  config: &IgnoreConfig,
  client: &SnykClient,
) -> RowOutcome {
  let issue_url = cell(record, columns.issue_url);
  if issue_url.is_empty() {
    return RowOutcome::skipped(row, None, SkipReason::MissingUrl);
  }

  let Some(reference) = IssueReference::parse(issue_url) else {
    let reason = SkipReason::UnparsableIdentifiers {
      url: issue_url.to_string(),
    };
    return RowOutcome::skipped(row, None, reason);
  };

  let column_text = config.reason_column.as_deref().map(|column| {
    let text = cell(record, columns.reason);
    if text.is_empty() {
      print_warning(&format!("Missing text in column {column} for row {row}"));
    }
    text
  });

  let Some(reason) = compose_reason(config.reason_text.as_deref(), column_text) else {
    return RowOutcome::skipped(row, Some(reference), SkipReason::MissingReason);
  };

  let request = IgnoreRequest {
    reference: reference.clone(),
    reason,
    reason_type: config.reason_type.clone(),
    disregard_if_fixable: config.disregard_if_fixable,
    expires: config.expires.clone(),
    ignore_path: config.ignore_path.clone(),
  };

  let status = match client.ignore_issue(&request, config.max_retries).await {
    Ok(response) if response.is_success() => RowStatus::Success,
    Ok(response) => RowStatus::Failed {
      status: response.status,
      body: response.body,
    },
    Err(e) => RowStatus::TransportError(format!("{e:#}")),
  };

  RowOutcome {
    row,
    reference: Some(reference),
    status,
  }
}
