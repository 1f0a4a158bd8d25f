//! Generate command implementation

use std::path::PathBuf;

use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::operations::{GenerateOperation, GenerateOptions};
use crate::ui::ConsoleReporter;

pub fn run(path: PathBuf, args: GenerateArgs, verbose: bool) -> Result<()> {
    let mut reporter = ConsoleReporter::new(verbose);
    let options = GenerateOptions {
        checked: args.checked,
    };

    GenerateOperation::new(path, options).execute(&mut reporter)?;
    Ok(())
}
