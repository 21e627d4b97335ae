//! Relative-tolerance comparison between measured and typical frequencies.

/// Default relative tolerance for frequency matching.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Returns true when `measured` lies within `tolerance` of `typical`,
/// relative to `typical`: `|measured - typical| / typical < tolerance`.
///
/// The typical frequency is the reference value, so the comparison is
/// asymmetric: `is_close(95.0, 100.0, tol)` and
/// `is_close(100.0, 95.0, tol)` can disagree near the boundary. A zero
/// or non-finite `typical` never matches; the division is not attempted.
pub fn is_close(measured: f64, typical: f64, tolerance: f64) -> bool {
    if typical == 0.0 || !typical.is_finite() || !measured.is_finite() {
        return false;
    }
    (measured - typical).abs() / typical < tolerance
}
