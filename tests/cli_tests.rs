//! CLI surface integration tests

mod common;

use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    common::fdroid_meta_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_missing_subcommand_fails() {
    common::fdroid_meta_cmd().assert().failure();
}

#[test]
fn test_version_command() {
    common::fdroid_meta_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fdroid-meta"))
        .stdout(predicate::str::contains("com.edward.studytracker"));
}

#[test]
fn test_completions_bash() {
    common::fdroid_meta_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fdroid-meta"));
}

#[test]
fn test_completions_unknown_shell() {
    common::fdroid_meta_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Unknown shell: tcsh"));
}

#[test]
fn test_workspace_from_env() {
    let workspace = common::TestWorkspace::new();

    common::fdroid_meta_cmd()
        .env("FDROID_META_WORKSPACE", &workspace.path)
        .arg("generate")
        .assert()
        .success();

    assert!(workspace.file_exists(common::METADATA_PATH));
}
