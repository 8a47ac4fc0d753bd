//! System-wide reports, read from a fake procfs.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{FakeProcFs, no_cfg_memviz_command};

#[test]
fn test_default_report() {
    let procfs = FakeProcFs::new().meminfo(8_000_000, 5_000_000);

    no_cfg_memviz_command()
        .arg("--procfs")
        .arg(procfs.path())
        .assert()
        .success()
        .stdout(
            "Total Memory: 8000000 KB\n\
             Available Memory: 5000000 KB\n\
             Used Memory: 3000000 KB | ########            \n",
        )
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_human_readable_report() {
    let procfs = FakeProcFs::new().meminfo(8_000_000, 5_000_000);

    no_cfg_memviz_command()
        .args(["-H", "-l", "8", "--procfs", procfs.path_str()])
        .assert()
        .success()
        .stdout(
            "Total Memory: 8000000 KB\n\
             Available Memory: 5000000 KB\n\
             Total Memory: 7.63 GiB\n\
             Available Memory: 4.77 GiB\n\
             Used Memory: 3000000 KB | ###     \n",
        );
}

#[test]
fn test_fully_used() {
    let procfs = FakeProcFs::new().meminfo(4_000, 0);

    no_cfg_memviz_command()
        .args(["--length", "5", "--procfs", procfs.path_str()])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Used Memory: 4000 KB | #####\n"));
}

#[test]
fn test_missing_meminfo() {
    let procfs = FakeProcFs::new();

    no_cfg_memviz_command()
        .args(["-l", "4", "--procfs", procfs.path_str()])
        .assert()
        .success()
        .stdout("Total Memory: 0 KB\nAvailable Memory: 0 KB\nUsed Memory: 0 KB |     \n");
}

#[test]
fn test_repeated_runs_match() {
    let procfs = FakeProcFs::new().meminfo(16_384_000, 1_234_567);

    let run = || {
        no_cfg_memviz_command()
            .args(["-H", "--procfs", procfs.path_str()])
            .output()
            .unwrap()
            .stdout
    };

    assert_eq!(run(), run());
}
