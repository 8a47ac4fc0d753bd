use std::{io, path::PathBuf};

use thiserror::Error;

use crate::Pid;

/// An error while reading memory data from the pseudo-filesystem.
///
/// None of these are fatal: readers hand them back alongside whatever value
/// they managed to collect, and the display text is what gets shown to the
/// user as a diagnostic line.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The per-process file is gone, usually because the process exited
    /// between being looked up and being read.
    #[error("ERROR: PID {pid} does not exist or {} is inaccessible.", .path.display())]
    ProcessNotFound { pid: Pid, path: PathBuf },

    /// Any other IO failure while opening or reading a file.
    #[error("Unexpected error while reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A labelled line was found, but its value wasn't an integer.
    #[error("Unexpected error while reading {}: invalid value in line '{line}'", .path.display())]
    Parse { path: PathBuf, line: String },

    /// Adding a line's value would overflow the running total.
    #[error(
        "Unexpected error while reading {}: total overflowed at line '{line}'",
        .path.display()
    )]
    Overflow { path: PathBuf, line: String },

    /// The file was read, but the expected label never showed up.
    #[error("Unexpected error while reading {}: no '{label}' entry found", .path.display())]
    MissingField { path: PathBuf, label: &'static str },
}

impl CollectionError {
    /// Maps an IO error on a per-process file, treating a missing file as the
    /// process no longer existing.
    pub(crate) fn from_process_io(pid: Pid, path: PathBuf, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            CollectionError::ProcessNotFound { pid, path }
        } else {
            CollectionError::Io { path, source: err }
        }
    }
}

/// A [`Result`] with the error type being a [`CollectionError`].
pub type CollectionResult<T> = Result<T, CollectionError>;
