//! Verify command implementation

use std::path::PathBuf;

use crate::cli::VerifyArgs;
use crate::error::Result;
use crate::operations::{VerifyOperation, VerifyOptions};
use crate::ui::ConsoleReporter;

pub fn run(path: PathBuf, args: VerifyArgs, verbose: bool) -> Result<()> {
    let mut reporter = ConsoleReporter::new(verbose);
    let options = VerifyOptions {
        strict: args.strict,
    };

    VerifyOperation::new(path, options).execute(&mut reporter)?;
    Ok(())
}
