//! F-Droid metadata record
//!
//! The file on disk is always produced from [`TEMPLATE`]; the typed record
//! here is only used to read a file back and check that it carries exactly
//! the expected fields.

pub mod template;

use serde::{Deserialize, Serialize};

use crate::error::{Result, metadata as metadata_error};

pub use template::{APP_ID, DEFAULT_METADATA_PATH, TEMPLATE};

/// Application metadata as F-Droid reads it from `metadata/<app-id>.yml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    #[serde(rename = "Categories")]
    pub categories: Vec<String>,

    #[serde(rename = "License")]
    pub license: String,

    #[serde(rename = "WebSite")]
    pub website: String,

    #[serde(rename = "SourceCode")]
    pub source_code: String,

    #[serde(rename = "IssueTracker")]
    pub issue_tracker: String,

    #[serde(rename = "AutoName")]
    pub auto_name: String,

    #[serde(rename = "RepoType")]
    pub repo_type: String,

    #[serde(rename = "Repo")]
    pub repo: String,

    /// Build recipes, oldest first
    #[serde(rename = "Builds")]
    pub builds: Vec<Build>,

    /// SHA-256 fingerprint of the upstream signing certificate
    #[serde(rename = "AllowedAPKSigningKeys")]
    pub allowed_apk_signing_keys: String,

    #[serde(rename = "AutoUpdateMode")]
    pub auto_update_mode: String,

    #[serde(rename = "UpdateCheckMode")]
    pub update_check_mode: String,

    #[serde(rename = "CurrentVersion")]
    pub current_version: String,

    #[serde(rename = "CurrentVersionCode")]
    pub current_version_code: u64,
}

/// One entry of the `Builds` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Build {
    pub version_name: String,
    pub version_code: u64,
    pub commit: String,
    pub subdir: String,
    /// Gradle flavours to build; `yes` builds the default flavour
    pub gradle: Vec<String>,
}

/// Parse `text` as a single YAML document without imposing any schema
pub fn parse_document(path: &str, text: &str) -> Result<serde_yaml::Value> {
    serde_yaml::from_str(text).map_err(|e| metadata_error::invalid_yaml(path, e.to_string()))
}

impl Metadata {
    /// Convert an already parsed document into the typed record
    ///
    /// Missing, mistyped and unknown fields are all schema errors, and the
    /// current version must have a matching build entry.
    pub fn from_document(path: &str, document: serde_yaml::Value) -> Result<Self> {
        let metadata: Self = serde_yaml::from_value(document)
            .map_err(|e| metadata_error::schema_mismatch(path, e.to_string()))?;

        if metadata.current_build().is_none() {
            return Err(metadata_error::schema_mismatch(
                path,
                format!(
                    "CurrentVersionCode {} has no matching entry in Builds",
                    metadata.current_version_code
                ),
            ));
        }

        Ok(metadata)
    }

    /// Parse and type-check a metadata document in one step
    pub fn from_yaml(path: &str, text: &str) -> Result<Self> {
        Self::from_document(path, parse_document(path, text)?)
    }

    /// The build entry whose version code is `CurrentVersionCode`
    pub fn current_build(&self) -> Option<&Build> {
        self.builds
            .iter()
            .find(|build| build.version_code == self.current_version_code)
    }
}
