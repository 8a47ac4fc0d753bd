//! Per-process resident memory from `/proc/<PID>/smaps`.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
};

use super::{ProcFs, error::CollectionError};
use crate::Pid;

pub const RSS: &str = "Rss:";

/// The resident set size of one process, in kibibytes.
///
/// If reading failed part way, `rss_kib` holds whatever was summed before the
/// failure and `error` says what went wrong. A sample with no error and an
/// `rss_kib` of 0 really is a process with nothing resident.
#[derive(Debug)]
pub struct RssSample {
    pub pid: Pid,
    pub rss_kib: u64,
    pub error: Option<CollectionError>,
}

impl RssSample {
    /// Whether every mapping entry was read successfully.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Returns the RSS of `pid` in kibibytes, summing every `Rss:` line in its
/// `smaps`. On failure this is the partial sum (or 0), and a diagnostic line
/// is written to stderr.
pub fn read_resident_set_kib(procfs: &ProcFs, pid: Pid) -> u64 {
    read_resident_set_kib_with(procfs, pid, &mut io::stderr().lock())
}

/// Like [`read_resident_set_kib`], but writes the diagnostic line to
/// `diagnostics`.
pub fn read_resident_set_kib_with<E: Write>(procfs: &ProcFs, pid: Pid, diagnostics: &mut E) -> u64 {
    let sample = read_rss_sample(procfs, pid);
    if let Some(err) = &sample.error {
        // Nowhere left to report a failed diagnostic write.
        let _ = writeln!(diagnostics, "{err}");
    }

    sample.rss_kib
}

/// Reads the RSS of `pid`. This never fails outright; see [`RssSample`].
pub fn read_rss_sample(procfs: &ProcFs, pid: Pid) -> RssSample {
    let path = procfs.smaps_path(pid);
    crate::debug!("Reading RSS for PID {pid} from {}", path.display());

    let mut rss_kib: u64 = 0;
    let error = match File::open(&path) {
        Ok(file) => {
            let mut reader = BufReader::new(file);
            let mut buffer = String::new();

            // Reuse one buffer across lines; smaps has several lines per mapping
            // and a large process can have thousands of mappings.
            loop {
                buffer.clear();
                match reader.read_line(&mut buffer) {
                    Ok(0) => break None,
                    Ok(_) => {
                        if !buffer.starts_with(RSS) {
                            continue;
                        }

                        let value = buffer
                            .split_whitespace()
                            .nth(1)
                            .and_then(|value| value.parse::<u64>().ok());

                        match value {
                            Some(value) => match rss_kib.checked_add(value) {
                                Some(sum) => rss_kib = sum,
                                None => {
                                    break Some(CollectionError::Overflow {
                                        path: path.clone(),
                                        line: buffer.trim_end().to_string(),
                                    });
                                }
                            },
                            None => {
                                break Some(CollectionError::Parse {
                                    path: path.clone(),
                                    line: buffer.trim_end().to_string(),
                                });
                            }
                        }
                    }
                    Err(err) => {
                        break Some(CollectionError::from_process_io(pid, path.clone(), err));
                    }
                }
            }
        }
        Err(err) => Some(CollectionError::from_process_io(pid, path.clone(), err)),
    };

    if let Some(_err) = &error {
        crate::warn!("Partial RSS of {rss_kib} KiB for PID {pid}: {_err}");
    }

    RssSample {
        pid,
        rss_kib,
        error,
    }
}
