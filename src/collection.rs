//! Memory data collection from the Linux pseudo-filesystem.
//!
//! Every read opens its own file, scans it once and closes it. Nothing is
//! cached, so two reads of unchanged files give the same answer.

pub mod error;
pub mod meminfo;
pub mod pids;
pub mod smaps;

use std::path::{Path, PathBuf};

use self::smaps::{RssSample, read_rss_sample};
use crate::Pid;

/// Where the live procfs is normally mounted.
pub const DEFAULT_PROCFS: &str = "/proc";

/// The root of a procfs-like directory tree to read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcFs {
    root: PathBuf,
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new(DEFAULT_PROCFS)
    }
}

impl ProcFs {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether this points at the host's own `/proc`.
    pub fn is_live(&self) -> bool {
        self.root == Path::new(DEFAULT_PROCFS)
    }

    pub fn meminfo_path(&self) -> PathBuf {
        self.root.join("meminfo")
    }

    pub fn pid_path(&self, pid: Pid) -> PathBuf {
        self.root.join(pid.to_string())
    }

    pub fn smaps_path(&self, pid: Pid) -> PathBuf {
        self.pid_path(pid).join("smaps")
    }
}

/// Resident memory for every process of a program, plus their sum.
#[derive(Debug)]
pub struct ProgramMemory {
    pub samples: Vec<RssSample>,
    pub total_rss_kib: u64,
}

impl ProgramMemory {
    /// Reads each PID independently. One unreadable process doesn't stop the
    /// others from being read.
    pub fn collect(procfs: &ProcFs, pids: &[Pid]) -> Self {
        Self::from_samples(
            pids.iter()
                .map(|&pid| read_rss_sample(procfs, pid))
                .collect(),
        )
    }

    pub fn from_samples(samples: Vec<RssSample>) -> Self {
        let total_rss_kib = samples
            .iter()
            .fold(0u64, |acc, sample| acc.saturating_add(sample.rss_kib));

        Self {
            samples,
            total_rss_kib,
        }
    }
}
