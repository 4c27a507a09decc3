//! Content entries: metadata, scanning, sorting, and category grouping.

mod frontmatter;
mod group;
mod meta;
mod scan;
mod sort;

pub use frontmatter::extract_frontmatter;
pub use group::{CategoryTab, category_tabs, group_by_category};
pub use meta::EntryMeta;
pub use scan::scan_entries;
pub use sort::{sort_by_date, sort_by_random, sort_by_title};

use serde::Serialize;

use crate::text::{plainify, truncate_chars};
use crate::utils::date::DateTimeUtc;

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// A single content entry (post) loaded from the content directory.
///
/// Serializes with `id` as a top-level field and the metadata flattened,
/// matching the shape listing templates consume.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    /// Slug identifier derived from the source file stem.
    pub id: String,
    /// Metadata from frontmatter (flattened in JSON output).
    #[serde(flatten)]
    pub meta: EntryMeta,
    /// Markdown body, kept out of serialized output.
    #[serde(skip)]
    pub body: String,
}

impl Entry {
    pub fn new(id: String, meta: EntryMeta, body: String) -> Self {
        Self { id, meta, body }
    }

    /// Check if this entry is a draft.
    #[inline]
    pub fn is_draft(&self) -> bool {
        self.meta.draft
    }

    /// Get title, falling back to the id if not set.
    pub fn title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or(&self.id)
    }

    /// Effective publication timestamp for ordering.
    ///
    /// Missing or unparseable dates count as the epoch, so undated entries
    /// sort behind every dated one in a newest-first listing.
    pub fn timestamp(&self) -> i64 {
        self.meta
            .date
            .as_deref()
            .and_then(DateTimeUtc::parse)
            .map(DateTimeUtc::to_unix_timestamp)
            .unwrap_or(0)
    }

    /// Check whether the entry carries the given category code.
    pub fn in_category(&self, code: &str) -> bool {
        self.meta.categories.iter().any(|c| c == code)
    }

    /// Plain-text excerpt for listings: the summary when present,
    /// otherwise the body, reduced to text and truncated.
    pub fn summary_text(&self, max_chars: usize) -> String {
        let source = self.meta.summary.as_deref().unwrap_or(&self.body);
        let plain = plainify(source);
        truncate_chars(plain.trim(), max_chars)
    }
}
