//! Line ending, YAML and schema errors

use super::MetaError;

/// Creates a CRLF detected error
pub fn crlf_detected(path: impl Into<String>) -> MetaError {
    MetaError::CrlfDetected { path: path.into() }
}

/// Creates a missing line feed error
pub fn no_line_feed(path: impl Into<String>) -> MetaError {
    MetaError::NoLineFeed { path: path.into() }
}

/// Creates an invalid YAML error
pub fn invalid_yaml(path: impl Into<String>, reason: impl Into<String>) -> MetaError {
    MetaError::InvalidYaml {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid encoding error
pub fn invalid_encoding(path: impl Into<String>, reason: impl Into<String>) -> MetaError {
    MetaError::InvalidEncoding {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a schema mismatch error
pub fn schema_mismatch(path: impl Into<String>, reason: impl Into<String>) -> MetaError {
    MetaError::SchemaMismatch {
        path: path.into(),
        reason: reason.into(),
    }
}
