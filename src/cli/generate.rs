use clap::Parser;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Write the metadata file:\n    fdroid-meta generate\n\n\
                  Write, sync to disk and re-check the file:\n    fdroid-meta generate --checked\n\n\
                  Write into another checkout:\n    fdroid-meta -w ../fdroiddata generate")]
pub struct GenerateArgs {
    /// Sync the file to disk, then check it is non-empty, LF-only and has a line feed
    #[arg(long)]
    pub checked: bool,
}
