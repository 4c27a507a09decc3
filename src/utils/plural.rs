//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 entries)
/// - `plural_s(1)` -> `""` (1 entry)
/// - `plural_s(5)` -> `"s"` (5 entries)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "entry", "entries")` -> `"0 entries"`
/// - `plural_count(1, "entry", "entries")` -> `"1 entry"`
#[inline]
pub fn plural_count(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
