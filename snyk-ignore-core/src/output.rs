//! # Output Formatting
//!
//! User-facing status lines with colors and emojis. Every row of a run is
//! reported through one of these helpers.

#![allow(clippy::print_stdout)]

use owo_colors::{OwoColorize, Stream};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Always use colored output
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Never use colored output
  Never,
}

impl ColorMode {
  /// Set the global color override for this mode
  pub fn apply(self) {
    match self {
      ColorMode::Always => owo_colors::set_override(true),
      ColorMode::Never => owo_colors::set_override(false),
      // Leave owo_colors to its own terminal detection
      ColorMode::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!(
    "{} {}",
    check.if_supports_color(Stream::Stdout, |text| text.green().bold().to_string()),
    message
  );
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  println!(
    "{} {}",
    cross.if_supports_color(Stream::Stdout, |text| text.red().bold().to_string()),
    message
  );
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!(
    "{} {}",
    warning.if_supports_color(Stream::Stdout, |text| text.yellow().bold().to_string()),
    message
  );
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!(
    "{} {}",
    info.if_supports_color(Stream::Stdout, |text| text.blue().bold().to_string()),
    message
  );
}
