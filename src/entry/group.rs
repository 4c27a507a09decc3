//! Category grouping for filter tabs.
//!
//! Turns a flat entry list into the tab row the home page renders:
//! one tab per category present, labeled through the configured
//! display-name table, counted, and ordered.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use super::Entry;
use crate::config::CategoriesConfig;
use crate::text::slugify;

/// A single category tab.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CategoryTab {
    /// Raw category code as written in frontmatter.
    pub name: String,
    /// URL-safe form of the code.
    pub slug: String,
    /// Localized label from the category table.
    pub display_name: String,
    /// Number of entries carrying this category.
    pub count: usize,
}

/// Build the ordered tab row for the categories present in `entries`.
///
/// Configured categories come first in their configured order; anything
/// else follows in order of first appearance.
pub fn category_tabs(entries: &[Entry], config: &CategoriesConfig) -> Vec<CategoryTab> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut seen_order: Vec<&str> = Vec::new();

    for entry in entries {
        for code in &entry.meta.categories {
            let count = counts.entry(code.as_str()).or_insert(0);
            if *count == 0 {
                seen_order.push(code.as_str());
            }
            *count += 1;
        }
    }

    let mut tabs = Vec::with_capacity(counts.len());
    let mut emitted: FxHashSet<&str> = FxHashSet::default();

    let configured = config.order.iter().map(String::as_str);
    for code in configured.chain(seen_order.iter().copied()) {
        let Some(&count) = counts.get(code) else {
            continue;
        };
        if !emitted.insert(code) {
            continue;
        }
        tabs.push(CategoryTab {
            name: code.to_string(),
            slug: slugify(code),
            display_name: config.display_name(code),
            count,
        });
    }

    tabs
}

/// Group entries by category code.
///
/// An entry with several categories appears under each of them; entries
/// without categories appear nowhere.
pub fn group_by_category<'a>(entries: &'a [Entry]) -> FxHashMap<&'a str, Vec<&'a Entry>> {
    let mut groups: FxHashMap<&str, Vec<&Entry>> = FxHashMap::default();
    for entry in entries {
        for code in &entry.meta.categories {
            groups.entry(code.as_str()).or_default().push(entry);
        }
    }
    groups
}
