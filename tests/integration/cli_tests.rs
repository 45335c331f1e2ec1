//! CLI integration tests for lazy-typer.
//!
//! These tests verify the command-line interface behavior using assert_cmd.
//! Every run gets its own `XDG_CONFIG_HOME`, so no test touches the real
//! store. Runs that would reach an interactive prompt have no terminal and
//! are expected to fail once they get there.

use std::time::Duration;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use crate::integration::fixtures::{standard_scripts, Sandbox};

/// Get a Command for the lazy-typer binary, isolated in `sandbox`.
fn lazy_typer(sandbox: &Sandbox) -> Command {
    let mut cmd = cargo_bin_cmd!("lazy-typer");
    cmd.current_dir(sandbox.workspace())
        .env("XDG_CONFIG_HOME", sandbox.config_home())
        .env("HOME", sandbox.root())
        .env_remove("RUST_LOG")
        .timeout(Duration::from_secs(10));
    cmd
}

fn save_profile(sandbox: &Sandbox, folders: &[&str], package_manager: &str) {
    let folders: Vec<String> = folders
        .iter()
        .map(|f| sandbox.workspace().join(f).display().to_string())
        .collect();
    let mut profiles = serde_json::Map::new();
    profiles.insert(
        sandbox.workspace().display().to_string(),
        serde_json::json!({ "folders": folders, "packageManager": package_manager }),
    );
    sandbox.write_store(&serde_json::Value::Object(profiles).to_string());
}

// ==================== Help and Version ====================

#[test]
fn test_help_output() {
    let sandbox = Sandbox::new();

    lazy_typer(&sandbox)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--clear"))
        .stdout(predicate::str::contains("--clear-all"));
}

#[test]
fn test_version_output() {
    let sandbox = Sandbox::new();

    lazy_typer(&sandbox)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lazy-typer"))
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

#[test]
fn test_unknown_flag_is_rejected() {
    let sandbox = Sandbox::new();

    lazy_typer(&sandbox)
        .arg("--list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--list"));
}

// ==================== Saved Profiles ====================

#[test]
fn test_no_manifests_exits_with_error() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.workspace().join("empty")).unwrap();
    save_profile(&sandbox, &["empty"], "npm");

    lazy_typer(&sandbox)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No package.json's found"));
}

#[test]
fn test_manifests_in_skipped_dirs_do_not_count() {
    let sandbox = Sandbox::new();
    sandbox.add_project("node_modules/vite", &standard_scripts());
    sandbox.add_project("dist/bundle", &standard_scripts());
    save_profile(&sandbox, &["."], "yarn");

    lazy_typer(&sandbox)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No package.json's found"));
}

#[test]
fn test_corrupt_store_is_backed_up() {
    let sandbox = Sandbox::new();
    sandbox.write_store("{ not json");

    lazy_typer(&sandbox).assert().failure();

    assert!(sandbox.store_path().with_extension("json.bak").exists());
}

#[test]
fn test_invalid_profile_is_kept_without_backup() {
    let sandbox = Sandbox::new();
    let key = sandbox.workspace().display().to_string();
    let mut profiles = serde_json::Map::new();
    profiles.insert(
        key.clone(),
        serde_json::json!({ "folders": [], "packageManager": "custom" }),
    );
    sandbox.write_store(&serde_json::Value::Object(profiles).to_string());

    // The invalid profile is ignored, so setup runs and fails without input.
    lazy_typer(&sandbox).assert().failure();

    assert!(!sandbox.store_path().with_extension("json.bak").exists());
    assert_eq!(
        sandbox.read_store()[key.as_str()]["packageManager"],
        "custom"
    );
}

// ==================== Clearing ====================

#[test]
fn test_clear_removes_profile_before_setup() {
    let sandbox = Sandbox::new();
    save_profile(&sandbox, &["."], "npm");

    lazy_typer(&sandbox)
        .arg("--clear")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration has been cleared."));

    assert!(!sandbox.store_path().exists());
}

#[test]
fn test_clear_all_without_store() {
    let sandbox = Sandbox::new();

    lazy_typer(&sandbox)
        .arg("--clear-all")
        .assert()
        .failure()
        .stdout(predicate::str::contains("No configuration found to clear."));
}

#[test]
fn test_clear_keeps_other_profiles() {
    let sandbox = Sandbox::new();
    let mut profiles = serde_json::Map::new();
    profiles.insert(
        sandbox.workspace().display().to_string(),
        serde_json::json!({ "folders": [], "packageManager": "npm" }),
    );
    profiles.insert(
        "/somewhere/else".to_string(),
        serde_json::json!({ "folders": ["/somewhere/else"], "packageManager": "pnpm" }),
    );
    sandbox.write_store(&serde_json::Value::Object(profiles).to_string());

    lazy_typer(&sandbox).arg("--clear").assert().failure();

    let store = sandbox.read_store();
    assert!(store.get("/somewhere/else").is_some());
    assert!(store
        .get(sandbox.workspace().display().to_string())
        .is_none());
}

// ==================== First Run ====================

#[test]
fn test_first_run_without_terminal_fails_cleanly() {
    let sandbox = Sandbox::new();

    lazy_typer(&sandbox)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please specify which folders to scan"))
        .stderr(predicate::str::contains("panicked").not());

    assert!(!sandbox.store_path().exists());
}
