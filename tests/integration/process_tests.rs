//! Per-program reports, read from a fake procfs.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{FakeProcFs, no_cfg_memviz_command};

fn demo_procfs() -> FakeProcFs {
    FakeProcFs::new()
        .meminfo(8_000_000, 5_000_000)
        .process(100, "demo", &[10, 250, 4])
        .process(101, "demo", &[1_000_000])
        .process(200, "other", &[5])
}

#[test]
fn test_program_report() {
    let procfs = demo_procfs();

    no_cfg_memviz_command()
        .args(["-l", "8", "--procfs", procfs.path_str(), "demo"])
        .assert()
        .success()
        .stdout(
            "Memory usage for program 'demo':\n\
             PID 100: 264 KB |         \n\
             PID 101: 1000000 KB | #       \n\
             Total: 1000264 KB\n",
        )
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_program_report_human_readable() {
    let procfs = FakeProcFs::new()
        .meminfo(8_000_000, 5_000_000)
        .process(42, "demo", &[1024, 1024]);

    no_cfg_memviz_command()
        .args(["-H", "-l", "4", "--procfs", procfs.path_str(), "demo"])
        .assert()
        .success()
        .stdout(
            "Memory usage for program 'demo':\n\
             PID 42: 2048 KB 2.00 MiB |     \n\
             Total: 2048 KB 2.00 MiB\n",
        );
}

#[test]
fn test_program_not_found() {
    let procfs = demo_procfs();

    no_cfg_memviz_command()
        .args(["--procfs", procfs.path_str(), "missing"])
        .assert()
        .success()
        .stdout("No running processes found for program: missing\n");
}

#[test]
fn test_vanished_process_is_reported_and_skipped() {
    let procfs = demo_procfs().vanishing_process(300, "demo");
    let smaps_path = procfs.smaps_path(300);

    no_cfg_memviz_command()
        .args(["-l", "4", "--procfs", procfs.path_str(), "demo"])
        .assert()
        .success()
        .stdout(
            "Memory usage for program 'demo':\n\
             PID 100: 264 KB |     \n\
             PID 101: 1000000 KB | #   \n\
             PID 300: 0 KB |     \n\
             Total: 1000264 KB\n",
        )
        .stderr(format!(
            "ERROR: PID 300 does not exist or {} is inaccessible.\n",
            smaps_path.display()
        ));
}

#[test]
fn test_process_larger_than_total_memory() {
    let procfs = FakeProcFs::new()
        .meminfo(1_000, 500)
        .process(7, "hog", &[4_000]);

    no_cfg_memviz_command()
        .args(["-l", "5", "--procfs", procfs.path_str(), "hog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PID 7: 4000 KB | #####\n"));
}

#[test]
fn test_missing_procfs_root() {
    let procfs = FakeProcFs::new();
    let missing = procfs.path().join("not-here");

    no_cfg_memviz_command()
        .arg("--procfs")
        .arg(&missing)
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to look up processes for 'demo'."));
}
