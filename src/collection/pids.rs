//! Resolving a program name to the PIDs of its running processes.

use std::{
    fs,
    io::{self, ErrorKind},
    path::Path,
    process::Command,
};

use super::{
    ProcFs,
    error::{CollectionError, CollectionResult},
};
use crate::Pid;

/// The external lookup used against the live `/proc`.
const PIDOF: &str = "pidof";

/// Returns the PIDs of every running process named `program`, sorted and
/// without duplicates. An empty list means nothing matched.
///
/// Against the live `/proc` this asks `pidof`, falling back to scanning
/// `/proc` if `pidof` isn't installed. Any other procfs root is always
/// scanned directly.
pub fn resolve_pids(program: &str, procfs: &ProcFs) -> CollectionResult<Vec<Pid>> {
    let mut pids = if procfs.is_live() {
        match pids_from_pidof(program) {
            Ok(pids) => pids,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                crate::info!("'{PIDOF}' is unavailable, scanning procfs instead");
                pids_from_procfs(program, procfs)?
            }
            Err(_err) => {
                crate::warn!("'{PIDOF}' failed ({_err}), treating as no matches");
                Vec::new()
            }
        }
    } else {
        pids_from_procfs(program, procfs)?
    };

    pids.sort_unstable();
    pids.dedup();
    crate::debug!("Resolved '{program}' to {pids:?}");

    Ok(pids)
}

fn pids_from_pidof(program: &str) -> io::Result<Vec<Pid>> {
    let output = Command::new(PIDOF).arg(program).output()?;

    // pidof exits with 1 and prints nothing when there are no matches.
    Ok(parse_pid_list(&String::from_utf8_lossy(&output.stdout)))
}

/// Parses a whitespace-separated list of PIDs, skipping anything that isn't one.
pub(crate) fn parse_pid_list(list: &str) -> Vec<Pid> {
    list.split_whitespace()
        .filter_map(|pid| pid.parse::<Pid>().ok())
        .collect()
}

#[inline]
fn is_str_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Scans `<root>/<PID>/` entries for processes whose `comm`, or the file name
/// of their first command line argument, is `program`.
fn pids_from_procfs(program: &str, procfs: &ProcFs) -> CollectionResult<Vec<Pid>> {
    let root = procfs.root();
    let entries = fs::read_dir(root).map_err(|source| CollectionError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    // Need to filter out non-PID entries.
    let pids = entries
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            let name = name.trim();

            if is_str_numeric(name) {
                let pid = name.parse::<Pid>().ok()?;
                is_named(&entry.path(), program).then_some(pid)
            } else {
                None
            }
        })
        .collect();

    Ok(pids)
}

/// Processes may exit mid-scan, so any unreadable file just means "no match".
fn is_named(pid_path: &Path, program: &str) -> bool {
    if let Ok(comm) = fs::read_to_string(pid_path.join("comm")) {
        if comm.trim_end_matches('\n') == program {
            return true;
        }
    }

    // `comm` is truncated to 15 characters, so long names need the command line.
    if let Ok(cmdline) = fs::read(pid_path.join("cmdline")) {
        let argv0 = cmdline.split(|&b| b == 0).next().unwrap_or_default();
        let argv0 = String::from_utf8_lossy(argv0);

        if let Some(file_name) = Path::new(argv0.as_ref()).file_name() {
            return file_name == program;
        }
    }

    false
}
