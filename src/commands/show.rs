//! Show command implementation

use std::path::PathBuf;

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::operations::{ShowOperation, ShowOptions};

pub fn run(path: PathBuf, args: ShowArgs) -> Result<()> {
    ShowOperation::new(path, ShowOptions { json: args.json }).execute()
}
