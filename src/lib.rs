//! A small Linux memory usage reporter.
//!
//! memviz prints a point-in-time snapshot of either system-wide memory
//! (from `/proc/meminfo`) or the resident memory of every process of a
//! program (from `/proc/<PID>/smaps`), each with a text bar showing usage as
//! a share of total memory.

#![warn(rust_2018_idioms)]

pub mod utils {
    pub mod data_units;
    pub mod general;
    pub mod logging;
}
pub mod canvas;
pub mod collection;
pub mod options;
pub mod report;

use anyhow::Context;

use crate::{
    collection::pids::resolve_pids,
    options::{MemvizOptions, args::get_args},
    report::{display_process_memory, display_system_memory},
};

#[cfg(target_family = "unix")]
pub type Pid = libc::pid_t;

/// Parses the arguments, then prints the requested report.
pub fn start_memviz() -> anyhow::Result<()> {
    let args = get_args();

    #[cfg(all(feature = "logging", debug_assertions))]
    {
        utils::logging::init_logger(
            log::LevelFilter::Debug,
            Some(std::ffi::OsStr::new("memviz-debug.log")),
        )?;
    }

    let options = options::init(args).context("Unable to set up memviz's options.")?;
    crate::debug!("Running with {options:?}");

    run(&options)
}

/// Prints the report described by `options`.
pub fn run(options: &MemvizOptions) -> anyhow::Result<()> {
    let MemvizOptions {
        display,
        procfs,
        program,
    } = options;

    match program {
        Some(program) => {
            let pids = resolve_pids(program, procfs)
                .with_context(|| format!("Unable to look up processes for '{program}'."))?;

            if pids.is_empty() {
                println!("No running processes found for program: {program}");
            } else {
                display_process_memory(program, &pids, procfs, display)
                    .context("Unable to print the process memory report.")?;
            }
        }
        None => {
            display_system_memory(procfs, display)
                .context("Unable to print the system memory report.")?;
        }
    }

    Ok(())
}
