//! Markdown to plain-text reduction.
//!
//! Used for listing excerpts and meta descriptions: render the markdown,
//! drop the markup, and hand back readable text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::markdown::markdownify;

/// HTML tags, opening or closing, including ones cut off at end of input.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)</?[^>]+(>|$)").expect("tag pattern is valid"));

/// Two line breaks with optional whitespace between them.
static BLANK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n][ \t\r\n]*[\r\n]").expect("blank-line pattern is valid"));

/// The only entities the reducer decodes. Anything else (named or numeric)
/// passes through untouched; that keeps the transform predictable for the
/// odd literal entity an author writes on purpose.
const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Reduce markdown to plain, human-readable text.
///
/// The content is rendered to block HTML, all tags are stripped, runs of
/// blank lines collapse away, and the fixed entity set decodes back to
/// literal characters.
pub fn plainify(content: &str) -> String {
    let html = markdownify(content, true);
    let stripped = TAG_RE.replace_all(&html, "");
    let collapsed = BLANK_RE.replace_all(&stripped, "");
    decode_entities(&collapsed).into_owned()
}

/// Decode the fixed entity set, leaving every other `&...;` sequence as-is.
pub fn decode_entities(content: &str) -> Cow<'_, str> {
    if !content.contains('&') {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, literal)) => {
                out.push_str(literal);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    Cow::Owned(out)
}

/// Truncate to at most `max` characters, appending an ellipsis when
/// anything was cut. Truncation happens on char boundaries, never bytes.
pub fn truncate_chars(content: &str, max: usize) -> String {
    match content.char_indices().nth(max) {
        Some((idx, _)) => {
            let mut out = content[..idx].trim_end().to_string();
            out.push('…');
            out
        }
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plainify_strips_emphasis() {
        assert_eq!(plainify("**bold** text"), "bold text\n");
    }

    #[test]
    fn test_plainify_collapses_blank_runs() {
        let out = plainify("**bold** text\n\n\nmore");
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert_eq!(out, "bold text\nmore\n");
    }

    #[test]
    fn test_plainify_strips_raw_html() {
        let out = plainify("a <span class=\"x\">b</span> c");
        assert_eq!(out, "a b c\n");
    }

    #[test]
    fn test_plainify_decodes_fixed_entities() {
        // The renderer escapes these, the reducer brings them back
        assert_eq!(plainify("a & b"), "a & b\n");
        assert_eq!(plainify("\"quoted\""), "\"quoted\"\n");
        assert_eq!(plainify("it's"), "it's\n");
    }

    #[test]
    fn test_decode_entities_fixed_set_only() {
        assert_eq!(decode_entities("&lt;x&gt;"), "<x>");
        assert_eq!(decode_entities("&nbsp;"), " ");
        // Outside the fixed set: untouched
        assert_eq!(decode_entities("&copy; 2024"), "&copy; 2024");
        assert_eq!(decode_entities("&#65;"), "&#65;");
    }

    #[test]
    fn test_decode_entities_bare_ampersand() {
        assert_eq!(decode_entities("fish & chips"), "fish & chips");
        assert_eq!(decode_entities("&"), "&");
    }

    #[test]
    fn test_decode_entities_borrows_when_clean() {
        assert!(matches!(decode_entities("no entities"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly", 7), "exactly");
        assert_eq!(truncate_chars("hello world", 5), "hello…");
        // Multi-byte text truncates on char boundaries
        assert_eq!(truncate_chars("ดินแดนแห่งหมาป่า", 3), "ดิน…");
    }
}
