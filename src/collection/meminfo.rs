//! System-wide memory totals from `/proc/meminfo`.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::{
    ProcFs,
    error::{CollectionError, CollectionResult},
};
use crate::utils::general::saturating_ratio;

pub const MEM_TOTAL: &str = "MemTotal:";
pub const MEM_AVAILABLE: &str = "MemAvailable:";

/// A point-in-time view of system memory, in kibibytes.
///
/// A field that couldn't be read is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemInfo {
    pub total_kib: u64,
    pub available_kib: u64,
}

impl MemInfo {
    /// Memory in use, or `total - available`. This won't go below zero even
    /// if the two reads were inconsistent.
    #[inline]
    pub fn used_kib(&self) -> u64 {
        self.total_kib.saturating_sub(self.available_kib)
    }

    /// Used memory as a fraction of total memory, or 0 if the total is unknown.
    #[inline]
    pub fn used_ratio(&self) -> f64 {
        saturating_ratio(self.used_kib(), self.total_kib)
    }
}

/// Reads both totals. Each is read from its own pass over the file.
pub fn read_meminfo(procfs: &ProcFs) -> MemInfo {
    MemInfo {
        total_kib: read_total_memory_kib(procfs),
        available_kib: read_available_memory_kib(procfs),
    }
}

/// Returns `MemTotal` in kibibytes, or 0 if it can't be read.
pub fn read_total_memory_kib(procfs: &ProcFs) -> u64 {
    read_or_zero(procfs, MEM_TOTAL)
}

/// Returns `MemAvailable` in kibibytes, or 0 if it can't be read.
pub fn read_available_memory_kib(procfs: &ProcFs) -> u64 {
    read_or_zero(procfs, MEM_AVAILABLE)
}

fn read_or_zero(procfs: &ProcFs, label: &'static str) -> u64 {
    match read_meminfo_field(procfs, label) {
        Ok(value) => value,
        Err(_err) => {
            crate::warn!("Treating {label} as 0: {_err}");
            0
        }
    }
}

/// Reads the value of a single labelled field (e.g. `MemTotal:`) from
/// `meminfo`.
pub fn read_meminfo_field(procfs: &ProcFs, label: &'static str) -> CollectionResult<u64> {
    let path = procfs.meminfo_path();
    crate::debug!("Reading {label} from {}", path.display());

    let file = File::open(&path).map_err(|source| CollectionError::Io {
        path: path.clone(),
        source,
    })?;

    parse_field(BufReader::new(file), &path, label)
}

/// Scans for the first line starting with `label`, and parses the next
/// whitespace-separated token as the value.
fn parse_field<R: BufRead>(
    mut reader: R, path: &Path, label: &'static str,
) -> CollectionResult<u64> {
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes = reader
            .read_line(&mut buffer)
            .map_err(|source| CollectionError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        if bytes == 0 {
            return Err(CollectionError::MissingField {
                path: path.to_path_buf(),
                label,
            });
        }

        if buffer.starts_with(label) {
            return buffer
                .split_whitespace()
                .nth(1)
                .and_then(|value| value.parse::<u64>().ok())
                .ok_or_else(|| CollectionError::Parse {
                    path: path.to_path_buf(),
                    line: buffer.trim_end().to_string(),
                });
        }
    }
}
