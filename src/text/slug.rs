//! URL slug derivation.

use deunicode::deunicode;

/// Derive a URL-safe slug from arbitrary text.
///
/// Unicode is transliterated to ASCII, the result is lowercased, and any
/// run of non-alphanumeric characters collapses to a single `-`. Slugs
/// never start or end with a separator, so the function is idempotent on
/// its own output.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
/// ```
pub fn slugify(content: &str) -> String {
    let ascii = deunicode(content);
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_separator = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_separator = false;
        } else if !slug.is_empty() && !prev_separator {
            slug.push('-');
            prev_separator = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}
