//! Common test utilities for fdroid-meta integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Metadata path the binary uses when no `--file` is given
#[allow(dead_code)]
pub const METADATA_PATH: &str = "metadata/com.edward.studytracker.yml";

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace as raw bytes
    #[allow(dead_code)]
    pub fn read_bytes(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the fdroid-meta binary, ignoring developer overrides
pub fn fdroid_meta_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fdroid-meta").expect("Failed to find fdroid-meta binary");
    cmd.env_remove("FDROID_META_WORKSPACE");
    cmd.env_remove("FDROID_META_FILE");
    cmd
}

/// Command for the fdroid-meta binary running inside `workspace`
#[allow(dead_code)]
pub fn fdroid_meta_cmd_in(workspace: &Path) -> Command {
    let mut cmd = fdroid_meta_cmd();
    cmd.current_dir(workspace);
    cmd
}

/// Run `generate` in `workspace` and expect success
#[allow(dead_code)]
pub fn generate(workspace: &TestWorkspace) {
    fdroid_meta_cmd_in(&workspace.path)
        .arg("generate")
        .assert()
        .success();
}

/// Check whether `bytes` contains a CRLF pair
#[allow(dead_code)]
pub fn has_crlf(bytes: &[u8]) -> bool {
    bytes.windows(2).any(|pair| pair == b"\r\n")
}
