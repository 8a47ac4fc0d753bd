/// Returns `part / whole` as a float, or `0.0` if `whole` is zero.
///
/// A zero total means the total could not be read, so there is nothing to
/// scale against.
#[inline]
pub fn saturating_ratio(part: u64, whole: u64) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64
    } else {
        0.0
    }
}
