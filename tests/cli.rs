#![cfg(unix)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn setup_intro(dir: &Path, contents: &str) {
    fs::write(dir.join("intro.md"), contents).expect("write intro");
}

fn cargo_bin() -> Command {
    Command::cargo_bin("readme-assembler").expect("binary")
}

#[test]
fn writes_readme_from_intro_and_command() {
    let temp = TempDir::new().expect("tempdir");
    setup_intro(temp.path(), "# Bench\n");

    cargo_bin()
        .current_dir(temp.path())
        .args(["--command", "echo day1 42"])
        .assert()
        .success();

    let readme = fs::read_to_string(temp.path().join("README.md")).expect("read readme");
    assert_eq!(readme, "# Bench\n\n```\nday1 42\n```\n");
}

#[test]
fn config_file_and_echo() {
    let temp = TempDir::new().expect("tempdir");
    setup_intro(temp.path(), "top\n");
    fs::write(
        temp.path().join("readme.toml"),
        "[command]\nrun = \"echo from-config\"\n\n[output]\npath = \"OUT.md\"\necho = true\n",
    )
    .expect("write config");

    cargo_bin()
        .current_dir(temp.path())
        .args(["--config", "readme.toml"])
        .assert()
        .success()
        .stdout(predicate::eq("top\n\n```\nfrom-config\n```\n"));

    assert!(temp.path().join("OUT.md").exists());
    assert!(!temp.path().join("README.md").exists());
}

#[test]
fn dry_run_prints_without_writing() {
    let temp = TempDir::new().expect("tempdir");
    setup_intro(temp.path(), "intro\n");

    cargo_bin()
        .current_dir(temp.path())
        .args(["--command", "printf 'h\\nh\\nh\\nx,y\\n'", "--obfuscate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*, *"));

    assert!(!temp.path().join("README.md").exists());
}

#[test]
fn missing_intro_fails_with_io_exit_code() {
    let temp = TempDir::new().expect("tempdir");

    cargo_bin()
        .current_dir(temp.path())
        .args(["--command", "echo hi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("intro.md"));

    assert!(!temp.path().join("README.md").exists());
}

#[test]
fn failing_command_propagates_exit_code() {
    let temp = TempDir::new().expect("tempdir");
    setup_intro(temp.path(), "intro\n");

    cargo_bin()
        .current_dir(temp.path())
        .args(["--command", "exit 5"])
        .assert()
        .code(5);
}

#[test]
fn invalid_placeholder_is_config_error() {
    let temp = TempDir::new().expect("tempdir");
    setup_intro(temp.path(), "intro\n");

    cargo_bin()
        .current_dir(temp.path())
        .args(["--command", "echo hi", "--obfuscate", "--placeholder", ","])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("placeholder"));
}
