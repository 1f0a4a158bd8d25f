//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - verify: Verify command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::metadata::DEFAULT_METADATA_PATH;

pub mod completions;
pub mod generate;
pub mod show;
pub mod verify;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;
pub use show::ShowArgs;
pub use verify::VerifyArgs;

/// fdroid-meta - F-Droid metadata generator
///
/// Write and validate the F-Droid metadata file for Study Tracker.
#[derive(Parser, Debug)]
#[command(
    name = "fdroid-meta",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate and validate F-Droid metadata for Study Tracker",
    long_about = "fdroid-meta writes the F-Droid build metadata (metadata/<app-id>.yml) with \
                  LF-only line endings and checks that an existing file is free of CRLF \
                  sequences and parses as YAML.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  fdroid-meta generate             \x1b[90m# Write the metadata file\x1b[0m\n   \
                  fdroid-meta generate --checked   \x1b[90m# Write, sync and re-check it\x1b[0m\n   \
                  fdroid-meta verify               \x1b[90m# Check line endings and YAML\x1b[0m\n   \
                  fdroid-meta verify --strict      \x1b[90m# Also check every field\x1b[0m\n   \
                  fdroid-meta show                 \x1b[90m# Print the metadata record\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory the metadata path is resolved against (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "FDROID_META_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Metadata file path, relative to the workspace
    #[arg(
        long,
        short = 'f',
        global = true,
        env = "FDROID_META_FILE",
        default_value = DEFAULT_METADATA_PATH
    )]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Metadata path with the workspace applied
    ///
    /// Absolute `--file` values are used as-is. Without `--workspace` the
    /// path stays relative to the current directory.
    pub fn metadata_path(&self) -> PathBuf {
        match &self.workspace {
            Some(root) if self.file.is_relative() => root.join(&self.file),
            _ => self.file.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the metadata file with LF line endings
    Generate(GenerateArgs),

    /// Check the metadata file for CRLF line endings and valid YAML
    Verify(VerifyArgs),

    /// Show the metadata record
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
