//! # Snyk Ignore CLI Entry Point
//!
//! Reads a CSV export of Snyk issues and ignores each one through the Snyk
//! API.

use anyhow::Result;
use clap::Parser;
use snyk_ignore_cli::cli::{Cli, handle_cli};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
  let cli = Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cli.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  // Diagnostics go to stderr so stdout carries only the per-row report
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  handle_cli(cli)
}
