//! Environment variable management for testing
//!
//! Tests that read configuration from the environment set variables through
//! an [`EnvVarGuard`] so the previous value is restored when the test ends.

use std::env;

/// RAII guard for a single environment variable
///
/// Records the variable's value on creation and restores it (or removes the
/// variable) when dropped.
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Start guarding `name`, leaving its current value untouched
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  /// Set the guarded variable
  pub fn set(&self, value: &str) {
    // SAFETY: tests that touch the same variable use distinct names or run
    // serially, so no other thread reads it concurrently.
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Remove the guarded variable
  pub fn remove(&self) {
    // SAFETY: see `set`.
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      // SAFETY: see `set`.
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      // SAFETY: see `set`.
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}
