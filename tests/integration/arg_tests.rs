//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{memviz_command, no_cfg_memviz_command};

#[test]
fn test_zero_length() {
    no_cfg_memviz_command()
        .arg("-l")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--length' must be greater than 0."));
}

#[test]
fn test_negative_length() {
    // This test should auto fail due to how clap works
    no_cfg_memviz_command()
        .arg("--length")
        .arg("-10")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_invalid_length() {
    no_cfg_memviz_command()
        .arg("-l")
        .arg("twenty")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'twenty'"));
}

#[test]
fn test_too_many_programs() {
    no_cfg_memviz_command()
        .arg("bash")
        .arg("zsh")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument 'zsh'"));
}

#[test]
fn test_help() {
    memviz_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--human-readable"))
        .stdout(predicate::str::contains("--length <N>"))
        .stdout(predicate::str::contains("[PROGRAM]"));
}

#[test]
fn test_version() {
    memviz_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("memviz "));
}

#[test]
fn test_missing_explicit_config() {
    memviz_command(&["-C", "./tests/valid_configs/does_not_exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does_not_exist.toml' does not exist."));
}
