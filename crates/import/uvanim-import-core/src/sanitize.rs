//! Attribute Sanitizer: drops stale texture records before a pass collects
//! new ones.
//!
//! Runs once per import, before any object-level hooks fire. Without it,
//! re-imports would keep appending composite records and first-match
//! resolution would pin objects to their oldest association forever.

use crate::settings::ImportSettings;

/// Substrings identifying texture-related extra properties. Entries
/// containing either are owned by this plugin and removed on every pass.
pub const MARKER_SUBSTRINGS: [&str; 2] = ["Tex", "Map"];

/// True when `s` contains any marker substring (case-sensitive).
pub fn contains_marker(s: &str) -> bool {
    MARKER_SUBSTRINGS.iter().any(|m| s.contains(m))
}

/// Remove every extra-property entry containing a marker, preserving the
/// relative order of the remainder. Returns the removed count.
///
/// Marks the settings dirty exactly when the filtered count differs from
/// the original count.
pub fn sanitize_extra_properties(settings: &mut ImportSettings) -> usize {
    let before = settings.extra_properties.len();
    settings.extra_properties.retain(|entry| !contains_marker(entry));
    let removed = before - settings.extra_properties.len();
    if removed > 0 {
        settings.mark_dirty();
    }
    removed
}
