//! Config files, valid and invalid.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{FakeProcFs, memviz_command};

#[test]
fn test_empty_config() {
    let procfs = FakeProcFs::new().meminfo(1_000, 500);

    memviz_command(&["-C", "./tests/valid_configs/empty_config.toml"])
        .args(["--procfs", procfs.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Used Memory: 500 KB | ##########          \n",
        ));
}

#[test]
fn test_all_flags_config() {
    let procfs = FakeProcFs::new().meminfo(8_000_000, 5_000_000);

    memviz_command(&["-C", "./tests/valid_configs/all_flags.toml"])
        .args(["--procfs", procfs.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Memory: 7.63 GiB\n"))
        .stdout(predicate::str::ends_with(
            "Used Memory: 3000000 KB | ####      \n",
        ));
}

#[test]
fn test_args_override_config() {
    let procfs = FakeProcFs::new().meminfo(8_000_000, 5_000_000);

    memviz_command(&["-C", "./tests/valid_configs/all_flags.toml"])
        .args(["-l", "4", "--procfs", procfs.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Used Memory: 3000000 KB | ##  \n"));
}

#[test]
fn test_procfs_from_config() {
    let procfs = FakeProcFs::new().meminfo(2_000, 1_000);
    let config_path = procfs.path().join("memviz.toml");
    std::fs::write(
        &config_path,
        format!("[flags]\nprocfs = '{}'\ngraph_length = 2\n", procfs.path_str()),
    )
    .unwrap();

    memviz_command(&["-C", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Total Memory: 2000 KB\nAvailable Memory: 1000 KB\nUsed Memory: 1000 KB | # \n");
}

#[test]
fn test_zero_length_config() {
    memviz_command(&["-C", "./tests/invalid_configs/zero_length.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'graph_length' must be greater than 0.",
        ));
}

#[test]
fn test_negative_length_config() {
    memviz_command(&["-C", "./tests/invalid_configs/negative_length.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file error"));
}

#[test]
fn test_bad_toml_config() {
    memviz_command(&["-C", "./tests/invalid_configs/bad_toml.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file error"));
}

#[test]
fn test_wrong_type_config() {
    memviz_command(&["-C", "./tests/invalid_configs/wrong_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file error"));
}
