//! Binary unit limits and conversions for sizes reported in kibibytes.
//!
//! The kernel reports memory in `kB`, which is really KiB (1024 bytes), so
//! everything here starts from a kibibyte count rather than bytes.

pub const KIBI_LIMIT: u64 = 1024;
pub const MEBI_LIMIT: u64 = 1024 * 1024;
pub const GIBI_LIMIT: u64 = 1024 * 1024 * 1024;
pub const TEBI_LIMIT: u64 = 1024 * 1024 * 1024 * 1024;

pub const KIBI_LIMIT_F64: f64 = 1024.0;
pub const MEBI_LIMIT_F64: f64 = 1024.0 * 1024.0;
pub const GIBI_LIMIT_F64: f64 = 1024.0 * 1024.0 * 1024.0;

/// The units a kibibyte count can be shown in, smallest first. Nothing past
/// a tebibyte is supported; larger values just stay in TiB.
pub const KIBI_UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

/// Returns a tuple containing the value and the unit for a size given in
/// kibibytes. In units of 1024. This only supports up to a tebi.
#[inline]
pub fn get_binary_kibibytes(kibibytes: u64) -> (f64, &'static str) {
    match kibibytes {
        k if k < KIBI_LIMIT => (kibibytes as f64, KIBI_UNITS[0]),
        k if k < MEBI_LIMIT => (kibibytes as f64 / KIBI_LIMIT_F64, KIBI_UNITS[1]),
        k if k < GIBI_LIMIT => (kibibytes as f64 / MEBI_LIMIT_F64, KIBI_UNITS[2]),
        _ => (kibibytes as f64 / GIBI_LIMIT_F64, KIBI_UNITS[3]),
    }
}

/// Returns a human-readable string for a size given in kibibytes, with two
/// decimal places (e.g. `1536` becomes `"1.50 MiB"`).
#[inline]
pub fn human_readable_format(kibibytes: u64) -> String {
    let (value, unit) = get_binary_kibibytes(kibibytes);
    format!("{value:.2} {unit}")
}
