//! The two reports memviz can print: system-wide memory, and memory for the
//! processes of one program.
//!
//! Each report is collected first and written after, so the same data can be
//! written to any [`Write`] (e.g. a buffer in tests).

use std::io::{self, Write};

use crate::{
    Pid,
    canvas::percent_to_graph,
    collection::{
        ProcFs, ProgramMemory,
        meminfo::{MemInfo, read_meminfo, read_total_memory_kib},
    },
    options::DisplayOptions,
    utils::{data_units::human_readable_format, general::saturating_ratio},
};

/// Returns `" <human-readable size>"` if enabled, otherwise nothing.
fn human_suffix(kibibytes: u64, options: &DisplayOptions) -> String {
    if options.human_readable {
        format!(" {}", human_readable_format(kibibytes))
    } else {
        String::new()
    }
}

/// System-wide memory usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemReport {
    pub meminfo: MemInfo,
}

impl SystemReport {
    pub fn collect(procfs: &ProcFs) -> Self {
        Self {
            meminfo: read_meminfo(procfs),
        }
    }

    pub fn write<W: Write>(&self, out: &mut W, options: &DisplayOptions) -> io::Result<()> {
        let MemInfo {
            total_kib,
            available_kib,
        } = self.meminfo;

        writeln!(out, "Total Memory: {total_kib} KB")?;
        writeln!(out, "Available Memory: {available_kib} KB")?;
        if options.human_readable {
            writeln!(out, "Total Memory: {}", human_readable_format(total_kib))?;
            writeln!(out, "Available Memory: {}", human_readable_format(available_kib))?;
        }

        let graph = percent_to_graph(self.meminfo.used_ratio(), options.graph_length);
        writeln!(out, "Used Memory: {} KB | {graph}", self.meminfo.used_kib())
    }
}

/// Resident memory for each process of a program, scaled against total
/// system memory.
#[derive(Debug)]
pub struct ProcessReport {
    pub program: String,
    pub total_memory_kib: u64,
    pub memory: ProgramMemory,
}

impl ProcessReport {
    pub fn collect(program: &str, procfs: &ProcFs, pids: &[Pid]) -> Self {
        Self {
            program: program.to_string(),
            total_memory_kib: read_total_memory_kib(procfs),
            memory: ProgramMemory::collect(procfs, pids),
        }
    }

    /// Writes the report to `out`, and a line to `diagnostics` for each
    /// process that couldn't be fully read.
    pub fn write<W: Write, E: Write>(
        &self, out: &mut W, diagnostics: &mut E, options: &DisplayOptions,
    ) -> io::Result<()> {
        writeln!(out, "Memory usage for program '{}':", self.program)?;

        for sample in &self.memory.samples {
            if let Some(err) = &sample.error {
                writeln!(diagnostics, "{err}")?;
            }

            let ratio = saturating_ratio(sample.rss_kib, self.total_memory_kib);
            writeln!(
                out,
                "PID {}: {} KB{} | {}",
                sample.pid,
                sample.rss_kib,
                human_suffix(sample.rss_kib, options),
                percent_to_graph(ratio, options.graph_length)
            )?;
        }

        let total_rss_kib = self.memory.total_rss_kib;
        writeln!(
            out,
            "Total: {total_rss_kib} KB{}",
            human_suffix(total_rss_kib, options)
        )
    }
}

/// Prints system-wide memory usage to stdout.
pub fn display_system_memory(procfs: &ProcFs, options: &DisplayOptions) -> io::Result<()> {
    let report = SystemReport::collect(procfs);
    report.write(&mut io::stdout().lock(), options)
}

/// Prints memory usage for each of `pids` to stdout, and any diagnostics to
/// stderr.
pub fn display_process_memory(
    program: &str, pids: &[Pid], procfs: &ProcFs, options: &DisplayOptions,
) -> io::Result<()> {
    let report = ProcessReport::collect(program, procfs, pids);
    report.write(&mut io::stdout().lock(), &mut io::stderr().lock(), options)
}
