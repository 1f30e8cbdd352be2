//! # Snyk Ignore Core Library
//!
//! Shared building blocks for the snyk-ignore tool: extraction of
//! organization, project and issue identifiers from Snyk issue URLs, the
//! validated run configuration, and formatted terminal output.

pub mod config;
pub mod consts;
pub mod issue_url;
pub mod output;

pub use config::{ConfigError, IgnoreConfig, ReasonType};
pub use issue_url::{IssueReference, parse_issue_id, parse_org_id, parse_project_id, percent_decode};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
