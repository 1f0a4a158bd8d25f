//! Show operation module

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::metadata::Metadata;
use crate::operations::verify::read_lf_text;
use crate::ui::display::display_metadata;

/// Options for the show operation
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowOptions {
    /// Print the record as pretty JSON
    pub json: bool,
}

/// High-level show operation
pub struct ShowOperation {
    path: PathBuf,
    options: ShowOptions,
}

impl ShowOperation {
    pub fn new(path: PathBuf, options: ShowOptions) -> Self {
        Self { path, options }
    }

    /// Execute show operation
    pub fn execute(&self) -> Result<()> {
        let metadata = load_metadata(&self.path)?;

        if self.options.json {
            println!("{}", to_json(&metadata)?);
        } else {
            display_metadata(&metadata);
        }

        Ok(())
    }
}

/// Read and type-check the metadata file at `path`
pub fn load_metadata(path: &Path) -> Result<Metadata> {
    let text = read_lf_text(path)?;
    Metadata::from_yaml(&path.display().to_string(), &text)
}

fn to_json(metadata: &Metadata) -> Result<String> {
    Ok(serde_json::to_string_pretty(metadata)?)
}
