//! Command implementations for fdroid-meta CLI

pub mod completions;
pub mod generate;
pub mod show;
pub mod verify;
pub mod version;
