//! Error types and handling for fdroid-meta
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`metadata`]: Line ending, YAML and schema errors

pub mod fs;
pub mod metadata;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fdroid-meta operations
#[derive(Error, Diagnostic, Debug)]
pub enum MetaError {
    // File system errors
    #[error("{path} not found")]
    #[diagnostic(
        code(fdroid_meta::fs::not_found),
        help("Run 'fdroid-meta generate' to create the metadata file")
    )]
    FileNotFound { path: String },

    #[error("File is empty after writing: {path}")]
    #[diagnostic(code(fdroid_meta::fs::empty))]
    EmptyFile { path: String },

    #[error("Failed to read file {path}: {reason}")]
    #[diagnostic(code(fdroid_meta::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(fdroid_meta::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Unexpected error: {message}")]
    #[diagnostic(code(fdroid_meta::fs::io_error))]
    IoError { message: String },

    // Line ending errors
    #[error("File contains CRLF line endings: {path}")]
    #[diagnostic(
        code(fdroid_meta::line_endings::crlf),
        help("F-Droid requires LF-only line endings. Regenerate with 'fdroid-meta generate'")
    )]
    CrlfDetected { path: String },

    #[error("No LF detected in {path} (strange for multiline)")]
    #[diagnostic(code(fdroid_meta::line_endings::no_lf))]
    NoLineFeed { path: String },

    // Metadata errors
    #[error("Invalid YAML in {path}: {reason}")]
    #[diagnostic(code(fdroid_meta::metadata::invalid_yaml))]
    InvalidYaml { path: String, reason: String },

    #[error("File is not valid UTF-8: {path}: {reason}")]
    #[diagnostic(code(fdroid_meta::metadata::invalid_encoding))]
    InvalidEncoding { path: String, reason: String },

    #[error("Metadata fields do not match the expected record in {path}: {reason}")]
    #[diagnostic(
        code(fdroid_meta::metadata::schema_mismatch),
        help("Compare the file against the output of 'fdroid-meta generate'")
    )]
    SchemaMismatch { path: String, reason: String },

    #[error("Failed to serialize metadata: {message}")]
    #[diagnostic(code(fdroid_meta::metadata::serialize_failed))]
    SerializeFailed { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(fdroid_meta::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for MetaError {
    fn from(err: std::io::Error) -> Self {
        MetaError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MetaError {
    fn from(err: serde_yaml::Error) -> Self {
        MetaError::InvalidYaml {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MetaError {
    fn from(err: serde_json::Error) -> Self {
        MetaError::SerializeFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MetaError>;
