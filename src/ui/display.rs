//! Display functions for the metadata record

use console::Style;

use crate::metadata::{Build, Metadata};

macro_rules! display_field {
    ($label:expr, $value:expr) => {
        println!("{} {}", Style::new().bold().apply_to($label), $value);
    };
}

/// Display the metadata record, one field per line
pub fn display_metadata(metadata: &Metadata) {
    println!(
        "{}",
        Style::new().bold().yellow().apply_to(&metadata.auto_name)
    );
    display_field!("Categories:", metadata.categories.join(", "));
    display_field!("License:", metadata.license);
    display_field!("Website:", metadata.website);
    display_field!("Source code:", metadata.source_code);
    display_field!("Issue tracker:", metadata.issue_tracker);
    display_field!(
        "Repository:",
        format!("{} ({})", metadata.repo, metadata.repo_type)
    );
    display_field!("Signing key:", metadata.allowed_apk_signing_keys);
    display_field!(
        "Updates:",
        format!(
            "check {}, auto update {}",
            metadata.update_check_mode, metadata.auto_update_mode
        )
    );
    display_field!(
        "Current version:",
        format!(
            "{} ({})",
            metadata.current_version, metadata.current_version_code
        )
    );

    println!("{}", Style::new().bold().apply_to("Builds:"));
    for build in &metadata.builds {
        display_build(build, metadata.current_version_code);
    }
}

fn display_build(build: &Build, current_version_code: u64) {
    let marker = if build.version_code == current_version_code {
        Style::new().green().apply_to(" (current)").to_string()
    } else {
        String::new()
    };

    println!(
        "  {} ({}){marker}",
        Style::new().bold().apply_to(&build.version_name),
        build.version_code
    );
    println!("    commit: {}", build.commit);
    println!("    subdir: {}", build.subdir);
    println!("    gradle: {}", build.gradle.join(", "));
}
