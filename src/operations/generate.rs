//! Generate operation module

use std::path::{Path, PathBuf};

use crate::common::fs::{Durability, file_size, read_bytes, write_lf};
use crate::common::line_endings::{contains_crlf, contains_lf};
use crate::error::{Result, fs as fs_error, metadata as metadata_error};
use crate::metadata::TEMPLATE;
use crate::ui::Reporter;

/// Options for the generate operation
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Sync to disk and re-read the file to validate it
    pub checked: bool,
}

/// High-level generate operation
///
/// Writes [`TEMPLATE`] to the metadata path with LF-only line endings.
pub struct GenerateOperation {
    path: PathBuf,
    options: GenerateOptions,
}

impl GenerateOperation {
    pub fn new(path: PathBuf, options: GenerateOptions) -> Self {
        Self { path, options }
    }

    /// Execute generate operation, returning the file size in bytes
    pub fn execute(&self, reporter: &mut dyn Reporter) -> Result<u64> {
        if self.options.checked {
            self.execute_checked(reporter)
        } else {
            self.execute_plain(reporter)
        }
    }

    fn execute_plain(&self, reporter: &mut dyn Reporter) -> Result<u64> {
        let written = write_lf(&self.path, TEMPLATE, Durability::Flushed)?;
        reporter.detail(&format!("Wrote {written} bytes"));
        reporter.info(&format!(
            "Created {} with LF line endings.",
            self.path.display()
        ));
        Ok(written as u64)
    }

    fn execute_checked(&self, reporter: &mut dyn Reporter) -> Result<u64> {
        reporter.info(&format!("Preparing to write to {}...", self.path.display()));

        let written = write_lf(&self.path, TEMPLATE, Durability::Synced)?;
        reporter.detail(&format!("Wrote and synced {written} bytes"));
        reporter.info("Write complete.");

        let size = check_written(&self.path)?;
        reporter.success(&format!(
            "File generated. Size: {size} bytes. No CRLF detected."
        ));
        Ok(size)
    }
}

/// Re-read a freshly written metadata file and check its line endings
///
/// The file must be non-empty, free of CRLF pairs and contain at least one
/// LF. Checks run in that order and stop at the first failure.
pub fn check_written(path: &Path) -> Result<u64> {
    let display = path.display().to_string();

    let size = file_size(path)?;
    if size == 0 {
        return Err(fs_error::empty(display));
    }

    let bytes = read_bytes(path)?;
    if contains_crlf(&bytes) {
        return Err(metadata_error::crlf_detected(display));
    }
    if !contains_lf(&bytes) {
        return Err(metadata_error::no_line_feed(display));
    }

    Ok(size)
}
