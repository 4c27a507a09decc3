//! Hyphenated-code to display-text transforms.
//!
//! These back the category tab labels: a code like `ayamatsu-root`
//! becomes `Ayamatsu Root`. Capitalization applies to the first letter
//! of the string and the first letter after each whitespace character,
//! matching how listing labels are rendered on the site.

/// Lowercase everything, turn hyphens into spaces, then capitalize the
/// first letter of the string and of each word.
///
/// ```ignore
/// assert_eq!(upper_humanize("ayamatsu-root"), "Ayamatsu Root");
/// ```
pub fn upper_humanize(content: &str) -> String {
    capitalize_words(&content.to_lowercase().replace('-', " "))
}

/// Like [`upper_humanize`], but non-initial letters keep their case.
///
/// ```ignore
/// assert_eq!(humanize("re-ZERO"), "Re ZERO");
/// ```
pub fn humanize(content: &str) -> String {
    capitalize_words(&content.replace('-', " "))
}

/// Lowercase and replace hyphens with spaces, without any capitalization.
pub fn lower_humanize(content: &str) -> String {
    content.to_lowercase().replace('-', " ")
}

/// Uppercase the first alphanumeric character at the start of the string
/// and after each whitespace character. All other characters pass through.
fn capitalize_words(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut at_word_start = true;

    for c in content.chars() {
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = c.is_whitespace();
        }
    }
    out
}
