//! Markdown to HTML rendering via pulldown-cmark.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

/// Options for markdown rendering
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
        }
    }

    /// Convert to pulldown-cmark Options
    ///
    /// The heading-attributes extension stays off: headings must render
    /// without ids or anchors the source didn't spell out.
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        opts
    }
}

/// Render markdown to HTML.
///
/// With `block = true` the full block structure is emitted (`<p>`, lists,
/// headings). With `block = false` the output is inline HTML with no
/// wrapping paragraph elements, suitable for embedding inside an existing
/// block element.
pub fn markdownify(content: &str, block: bool) -> String {
    let options = MarkdownOptions::all();
    if block {
        render_block(content, &options)
    } else {
        render_inline(content, &options)
    }
}

/// Render markdown as block-level HTML.
pub fn render_block(content: &str, options: &MarkdownOptions) -> String {
    let parser = Parser::new_ext(content, options.to_pulldown_options());
    let mut out = String::with_capacity(content.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Render markdown as inline HTML by dropping paragraph wrappers.
pub fn render_inline(content: &str, options: &MarkdownOptions) -> String {
    let parser = Parser::new_ext(content, options.to_pulldown_options()).filter(|event| {
        !matches!(
            event,
            Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph)
        )
    });
    let mut out = String::with_capacity(content.len() * 2);
    html::push_html(&mut out, parser);
    out.trim_end_matches('\n').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_has_no_paragraph() {
        assert_eq!(markdownify("**bold** text", false), "<strong>bold</strong> text");
        assert_eq!(markdownify("plain", false), "plain");
    }

    #[test]
    fn test_block_wraps_paragraph() {
        assert_eq!(
            markdownify("**bold** text", true),
            "<p><strong>bold</strong> text</p>\n"
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            markdownify("[here](https://example.com)", false),
            "<a href=\"https://example.com\">here</a>"
        );
    }

    #[test]
    fn test_heading_gets_no_id() {
        let html = markdownify("# Hello World", true);
        assert_eq!(html, "<h1>Hello World</h1>\n");
        assert!(!html.contains("id="));
    }

    #[test]
    fn test_strikethrough_extension() {
        assert_eq!(markdownify("~~gone~~", false), "<del>gone</del>");
    }

    #[test]
    fn test_multiple_paragraphs_block() {
        let html = markdownify("one\n\ntwo", true);
        assert_eq!(html, "<p>one</p>\n<p>two</p>\n");
    }

    #[test]
    fn test_email_like_text_not_mangled() {
        let html = markdownify("mail me at subaru@example.com", false);
        assert!(html.contains("subaru@example.com"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(markdownify("", true), "");
        assert_eq!(markdownify("", false), "");
    }
}
