use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the metadata record:\n    fdroid-meta show\n\n\
                  Show as JSON:\n    fdroid-meta show --json")]
pub struct ShowArgs {
    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}
