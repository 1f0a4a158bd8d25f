//! File system errors

use std::path::Path;

use super::MetaError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> MetaError {
    MetaError::FileNotFound { path: path.into() }
}

/// Creates an empty file error
pub fn empty(path: impl Into<String>) -> MetaError {
    MetaError::EmptyFile { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> MetaError {
    MetaError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> MetaError {
    MetaError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Maps an IO error from reading `path`, keeping "not found" distinct
pub fn from_read(path: &Path, err: &std::io::Error) -> MetaError {
    let display = path.display().to_string();
    match err.kind() {
        std::io::ErrorKind::NotFound => not_found(display),
        _ => read_failed(display, err.to_string()),
    }
}
