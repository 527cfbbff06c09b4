//! Error path coverage tests - the project .npmrc must survive every failure

#![cfg(unix)]

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

const ORIGINAL_NPMRC: &str = "save-exact=true\n";

#[allow(deprecated)]
fn rcwrap_cmd(workspace: &common::TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("rcwrap").unwrap();
    cmd.current_dir(workspace.project())
        .env_remove("RUST_LOG")
        .env_remove("RCWRAP_WORKSPACE")
        .env_remove("RCWRAP_CONFIG")
        .env_remove("RCWRAP_NPM")
        .env_remove("RCWRAP_REGISTRY")
        .env_remove("RCWRAP_TOKEN");
    cmd
}

fn assert_untouched(workspace: &common::TestWorkspace) {
    assert_eq!(workspace.read_file(".npmrc"), ORIGINAL_NPMRC);
    assert!(!workspace.backup_path().exists());
    assert!(!workspace.file_exists("rcwrap.npmrc.absent"));
}

#[test]
fn test_ssh_auth_is_rejected() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(".npmrc", ORIGINAL_NPMRC);
    workspace.write_file(
        "rcwrap.yaml",
        &format!("registry: {}\nauth:\n  type: ssh\n", common::REGISTRY),
    );
    let npm = workspace.install_fake_npm("", "true");

    rcwrap_cmd(&workspace)
        .arg("--npm")
        .arg(&npm)
        .arg("rewrite")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "SSH authentication is not supported",
        ));

    assert_untouched(&workspace);
}

#[test]
fn test_missing_token_is_rejected() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(".npmrc", ORIGINAL_NPMRC);
    workspace.write_file(
        "rcwrap.yaml",
        &format!("registry: {}\n", common::REGISTRY),
    );
    let npm = workspace.install_fake_npm("", "true");

    rcwrap_cmd(&workspace)
        .arg("--npm")
        .arg(&npm)
        .arg("rewrite")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No registry credential"));

    assert_untouched(&workspace);
}

#[test]
fn test_missing_npm_executable() {
    let workspace = common::TestWorkspace::new();
    workspace.write_settings();
    workspace.write_file(".npmrc", ORIGINAL_NPMRC);

    rcwrap_cmd(&workspace)
        .args(["--npm", "/nonexistent/rcwrap/npm", "rewrite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("npm executable not found"));

    assert_untouched(&workspace);
}

#[test]
fn test_failing_npm_config_list_restores() {
    let workspace = common::TestWorkspace::new();
    workspace.write_settings();
    workspace.write_file(".npmrc", ORIGINAL_NPMRC);
    let npm = workspace.install_fake_npm("", "true");
    // Make `npm config list` fail by removing its canned output
    std::fs::remove_file(workspace.bin.join("config-list.txt")).unwrap();

    rcwrap_cmd(&workspace)
        .arg("--npm")
        .arg(&npm)
        .arg("rewrite")
        .assert()
        .failure()
        .stderr(predicate::str::contains("npm config list failed"));

    assert_untouched(&workspace);
}

#[test]
fn test_corrupted_settings() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(".npmrc", ORIGINAL_NPMRC);
    workspace.write_file("rcwrap.yaml", "registry: [unclosed");

    rcwrap_cmd(&workspace)
        .arg("rewrite")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));

    assert_untouched(&workspace);
}
