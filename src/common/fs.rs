//! Common file system operations with unified error handling

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::common::line_endings::to_lf;
use crate::error::{Result, fs as fs_error};

/// How far a write is pushed towards the disk before returning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Durability {
    /// Flush userspace buffers only
    #[default]
    Flushed,
    /// Flush, then `fsync` file data and metadata
    Synced,
}

/// Write `content` to `path` with LF-only line endings
///
/// Missing parent directories are created. Returns the number of bytes
/// written, after line ending normalization.
pub fn write_lf(path: &Path, content: &str, durability: Durability) -> Result<usize> {
    let display = path.display().to_string();
    let write_failed = |e: std::io::Error| fs_error::write_failed(display.clone(), e.to_string());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            fs_error::write_failed(parent.display().to_string(), e.to_string())
        })?;
    }

    let content = to_lf(content);
    let file = File::create(path).map_err(write_failed)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .map_err(write_failed)?;
    writer.flush().map_err(write_failed)?;

    if durability == Durability::Synced {
        writer.get_ref().sync_all().map_err(write_failed)?;
    }

    Ok(content.len())
}

/// Read the raw bytes of `path`
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| fs_error::from_read(path, &e))
}

/// Size of `path` on disk, in bytes
pub fn file_size(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|e| fs_error::from_read(path, &e))
}
