//! Temporary CSV input files for testing

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// RAII guard for a CSV file written into a temporary directory
///
/// The directory and the file are removed when the guard is dropped.
pub struct CsvFileGuard {
  temp_dir: TempDir,
  path: PathBuf,
}

impl CsvFileGuard {
  /// Write `content` verbatim to `issues.csv` in a fresh temporary directory
  pub fn new(content: &str) -> Self {
    Self::from_bytes(content.as_bytes())
  }

  /// Write raw bytes, e.g. to produce rows that are not valid UTF-8
  pub fn from_bytes(content: &[u8]) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("issues.csv");
    fs::write(&path, content).expect("Failed to write test CSV");

    Self { temp_dir, path }
  }

  /// Build a CSV from a header and rows, quoting every cell
  pub fn from_rows(header: &[&str], rows: &[&[&str]]) -> Self {
    let line = |cells: &[&str]| {
      cells
        .iter()
        .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
    };

    let mut content = line(header);
    content.push('\n');
    for row in rows {
      content.push_str(&line(row));
      content.push('\n');
    }

    Self::new(&content)
  }

  /// Path to the CSV file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// A path inside the temporary directory that does not exist
  pub fn missing_path(&self) -> PathBuf {
    self.temp_dir.path().join("does-not-exist.csv")
  }
}
