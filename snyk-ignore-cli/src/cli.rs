//! # Command Line Interface
//!
//! Argument definitions for the snyk-ignore tool and the top-level run: build
//! the configuration, read the token, then process the CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, ArgGroup, Parser};
use snyk_ignore_api::auth::create_snyk_runtime_and_client;
use snyk_ignore_core::config::parse_api_url;
use snyk_ignore_core::consts::{DEFAULT_API_URL, DEFAULT_IGNORE_PATH, DEFAULT_MAX_RETRIES, ENV_SNYK_API};
use snyk_ignore_core::{ColorMode, IgnoreConfig, ReasonType};
use tracing::info;

use crate::processor::process_csv;
use crate::report::{RunSummary, print_summary};

/// Top-level CLI command for the snyk-ignore tool
#[derive(Parser, Debug)]
#[command(name = "snyk-ignore")]
#[command(about = "Ignore issues in Snyk using CSV input")]
#[command(
  long_about = "Ignore issues in Snyk using CSV input.\n\n\
        Reads a CSV file with an ISSUE_URL column holding Snyk issue URLs and ignores\n\
        each issue through the Snyk API. The API token is read from SNYK_TOKEN.\n\n\
        Rows are processed one at a time; a row that fails is reported and the run\n\
        continues with the next one."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
#[command(group(
  ArgGroup::new("reason_source")
    .args(["text", "ignore_text_column"])
    .required(true)
    .multiple(true)
))]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(long, value_enum, ignore_case = true, default_value_t = ColorMode::Auto)]
  pub colors: ColorMode,

  /// Path to the CSV file
  #[arg(long, value_name = "PATH")]
  pub file: PathBuf,

  /// The reason text for ignoring the issue
  #[arg(long)]
  pub text: Option<String>,

  /// Name of the CSV column containing the ignore reason text
  #[arg(
    long,
    value_name = "COLUMN",
    long_help = "Name of the CSV column containing the ignore reason text.\n\n\
             When --text is also given, the column text is appended to it."
  )]
  pub ignore_text_column: Option<String>,

  /// The classification of the ignore reason
  #[arg(
    long = "type",
    value_name = "REASON_TYPE",
    long_help = "The classification of the ignore reason.\n\n\
             Valid options include: 'not-vulnerable', 'wont-fix', 'temporary-ignore'."
  )]
  pub reason_type: ReasonType,

  /// Ignore only if no upgrade or patch is available
  #[arg(long)]
  pub disregard_if_fixable: bool,

  /// Timestamp (ISO 8601) when the ignore expires, e.g. 2025-12-31
  #[arg(long, value_name = "TIMESTAMP")]
  pub expires: Option<String>,

  /// Path to ignore
  #[arg(long, value_name = "PATH", default_value = DEFAULT_IGNORE_PATH)]
  pub ignore_path: String,

  /// Attempts per issue while the API is rate limiting
  #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_RETRIES)]
  pub max_retries: u32,

  /// Base URL of the Snyk v1 API
  #[arg(long, value_name = "URL", env = ENV_SNYK_API, default_value = DEFAULT_API_URL)]
  pub api_url: String,
}

impl Cli {
  /// Validate the parsed arguments into a run configuration
  pub fn to_config(&self) -> Result<IgnoreConfig> {
    let mut config = IgnoreConfig::new(self.file.clone(), self.reason_type.clone());
    config.reason_text = self.text.clone();
    config.reason_column = self.ignore_text_column.clone();
    config.disregard_if_fixable = self.disregard_if_fixable;
    config.expires = self.expires.clone();
    config.ignore_path = self.ignore_path.clone();
    config.max_retries = self.max_retries;

    config.validate().context("Invalid configuration")
  }
}

/// Run a full bulk-ignore pass for the parsed arguments.
///
/// Configuration problems, including a missing `SNYK_TOKEN`, are returned
/// before the CSV is opened.
pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let config = cli.to_config()?;
  let api_url = parse_api_url(&cli.api_url).context("Invalid configuration")?;
  let (rt, client) = create_snyk_runtime_and_client(&api_url)?;

  info!("Ignoring issues from {} via {}", config.file.display(), client.base_url());

  let outcomes = rt.block_on(process_csv(&config, &client))?;
  print_summary(&RunSummary::from_outcomes(&outcomes));

  Ok(())
}
