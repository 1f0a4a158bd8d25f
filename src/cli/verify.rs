use clap::Parser;

/// Arguments for the verify command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check line endings and YAML syntax:\n    fdroid-meta verify\n\n\
                  Also check every metadata field:\n    fdroid-meta verify --strict\n\n\
                  Check a different file:\n    fdroid-meta -f metadata/other.app.yml verify")]
pub struct VerifyArgs {
    /// Fail when the file has no line feed and check fields against the metadata record
    #[arg(long)]
    pub strict: bool,
}
