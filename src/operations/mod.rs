//! Operations module for the metadata file
//!
//! This module provides high-level operations that coordinate:
//! - GenerateOperation: Write the metadata template, optionally with checks
//! - VerifyOperation: Read the file back and validate line endings and YAML
//! - ShowOperation: Display the typed metadata record
//!
//! Status lines go through the `ui::Reporter` trait.

pub mod generate;
pub mod show;
pub mod verify;

pub use generate::{GenerateOperation, GenerateOptions};
pub use show::{ShowOperation, ShowOptions};
pub use verify::{VerifyOperation, VerifyOptions};
