//! fdroid-meta - F-Droid metadata generator
//!
//! Writes the F-Droid build metadata for Study Tracker with LF-only line
//! endings and validates an existing metadata file.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod error;
mod metadata;
mod operations;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let path = cli.metadata_path();
    let verbose = cli.verbose;

    // Generator failures are reported as errors, everything else as failures
    let (label, result) = match cli.command {
        Commands::Generate(args) => ("ERROR", commands::generate::run(path, args, verbose)),
        Commands::Verify(args) => ("FAILURE", commands::verify::run(path, args, verbose)),
        Commands::Show(args) => ("FAILURE", commands::show::run(path, args)),
        Commands::Version => ("Error", commands::version::run()),
        Commands::Completions(args) => ("Error", commands::completions::run(args)),
    };

    if let Err(e) = result {
        ui::report_error(label, &e);
        std::process::exit(1);
    }
}
