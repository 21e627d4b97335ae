//! Vibration-direction compatibility filter.

/// Decides whether a fault's recorded direction is compatible with the
/// direction the operator measured.
///
/// Case-insensitive and substring based: the catalog text must contain
/// the measured direction, or contain "et" which marks a fault exciting
/// both axes and matches any measurement. Only the catalog text is
/// searched; the reverse containment is never checked.
pub fn direction_matches(measured: &str, catalog: &str) -> bool {
    let catalog = catalog.to_lowercase();
    catalog.contains(&measured.to_lowercase()) || catalog.contains("et")
}
