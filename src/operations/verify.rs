//! Verify operation module

use std::path::{Path, PathBuf};

use crate::common::fs::read_bytes;
use crate::common::line_endings::{contains_crlf, contains_lf};
use crate::error::{Result, metadata as metadata_error};
use crate::metadata::{Metadata, parse_document};
use crate::ui::Reporter;

/// Options for the verify operation
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    /// Fail on a missing LF and check the document against [`Metadata`]
    pub strict: bool,
}

/// High-level verify operation
pub struct VerifyOperation {
    path: PathBuf,
    options: VerifyOptions,
}

impl VerifyOperation {
    pub fn new(path: PathBuf, options: VerifyOptions) -> Self {
        Self { path, options }
    }

    /// Execute verify operation
    ///
    /// Returns the typed record when running in strict mode.
    pub fn execute(&self, reporter: &mut dyn Reporter) -> Result<Option<Metadata>> {
        let display = self.path.display().to_string();
        let text = read_lf_text(&self.path)?;
        reporter.detail(&format!("Read {} bytes, no CRLF", text.len()));

        if !contains_lf(text.as_bytes()) {
            if self.options.strict {
                return Err(metadata_error::no_line_feed(display));
            }
            reporter.warning("File seems to have no newlines or is empty.");
        }

        let document = parse_document(&display, &text)?;
        let metadata = if self.options.strict {
            let metadata = Metadata::from_document(&display, document)?;
            reporter.detail(&format!(
                "Fields match the metadata record ({} builds)",
                metadata.builds.len()
            ));
            Some(metadata)
        } else {
            None
        };

        reporter.success("File has LF line endings and valid YAML.");
        Ok(metadata)
    }
}

/// Read `path` as UTF-8 text, rejecting any CRLF pair
pub fn read_lf_text(path: &Path) -> Result<String> {
    let display = path.display().to_string();

    let bytes = read_bytes(path)?;
    if contains_crlf(&bytes) {
        return Err(metadata_error::crlf_detected(display));
    }

    String::from_utf8(bytes).map_err(|e| metadata_error::invalid_encoding(display, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetaError;
    use crate::metadata::TEMPLATE;
    use crate::ui::RecordingReporter;
    use tempfile::TempDir;

    fn verify(content: &[u8], strict: bool) -> (Result<Option<Metadata>>, RecordingReporter) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.yml");
        std::fs::write(&path, content).unwrap();

        let mut reporter = RecordingReporter::default();
        let result = VerifyOperation::new(path, VerifyOptions { strict }).execute(&mut reporter);
        (result, reporter)
    }

    #[test]
    fn test_verify_template_succeeds() {
        let (result, reporter) = verify(TEMPLATE.as_bytes(), false);

        assert!(result.unwrap().is_none());
        assert!(reporter.contains("SUCCESS: File has LF line endings and valid YAML."));
        assert!(!reporter.contains("WARNING"));
    }

    #[test]
    fn test_verify_strict_returns_metadata() {
        let (result, _) = verify(TEMPLATE.as_bytes(), true);

        let metadata = result.unwrap().unwrap();
        assert_eq!(metadata.auto_name, "study tracker");
    }

    #[test]
    fn test_verify_rejects_crlf() {
        let crlf = TEMPLATE.replace('\n', "\r\n");
        let (result, reporter) = verify(crlf.as_bytes(), false);

        assert!(matches!(result, Err(MetaError::CrlfDetected { .. })));
        assert!(!reporter.contains("SUCCESS"));
    }

    #[test]
    fn test_verify_missing_file() {
        let temp = TempDir::new().unwrap();
        let mut reporter = RecordingReporter::default();
        let result = VerifyOperation::new(temp.path().join("missing.yml"), VerifyOptions::default())
            .execute(&mut reporter);

        assert!(matches!(result, Err(MetaError::FileNotFound { .. })));
    }

    #[test]
    fn test_verify_invalid_yaml() {
        let (result, _) = verify(b"Categories: [unclosed\n", false);
        assert!(matches!(result, Err(MetaError::InvalidYaml { .. })));
    }

    #[test]
    fn test_verify_invalid_utf8() {
        let (result, _) = verify(b"AutoName: \xff\xfe\n", false);
        assert!(matches!(result, Err(MetaError::InvalidEncoding { .. })));
    }

    #[test]
    fn test_verify_no_line_feed_warns() {
        let (result, reporter) = verify(b"AutoName: study tracker", false);

        assert!(result.is_ok());
        assert!(reporter.contains("WARNING: File seems to have no newlines or is empty."));
    }

    #[test]
    fn test_verify_strict_no_line_feed_fails() {
        let (result, _) = verify(b"AutoName: study tracker", true);
        assert!(matches!(result, Err(MetaError::NoLineFeed { .. })));
    }

    #[test]
    fn test_verify_accepts_foreign_mapping_unless_strict() {
        let content = b"Name: something else\n";

        assert!(verify(content, false).0.is_ok());
        assert!(matches!(
            verify(content, true).0,
            Err(MetaError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_read_lf_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.yml");
        std::fs::write(&path, "a: 1\n").unwrap();

        assert_eq!(read_lf_text(&path).unwrap(), "a: 1\n");
    }
}
