//! `[categories]` configuration: tab order and display names.
//!
//! The display-name table is data, not logic: the built-in table covers
//! the site's arc and route codes, and deployments override or extend it
//! from `arcview.toml` without touching the transforms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::text::upper_humanize;

/// Built-in category labels for the site's arcs and routes.
const ARC_NAMES: &[(&str, &str)] = &[
    ("arc-7", "Arc 7: ดินแดนแห่งหมาป่า"),
    ("arc-8", "Arc 8: วินเซนต์ วอลลาเคีย"),
    ("arc-9", "Arc 9: แสงแห่งดวงดาราไร้นาม"),
    ("ayamatsu", "Ayamatsu: รูทเย่อหยิ่ง"),
    ("mimagau", "Mimagau: รูทสลับเพศ"),
    ("oboberu", "Oboberu: รูทโทสะ"),
    ("ex5", "นิยายสปินออฟ EX5 \"ตำนานเจ้าหญิงสีชาด\""),
    ("tsugihagu", "Tsugihagu: รูทตะกละ"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoriesConfig {
    /// Display order of category tabs.
    pub order: Vec<String>,
    /// Category code -> localized display label.
    pub names: BTreeMap<String, String>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            order: ARC_NAMES.iter().map(|(code, _)| (*code).to_string()).collect(),
            names: ARC_NAMES
                .iter()
                .map(|(code, label)| ((*code).to_string(), (*label).to_string()))
                .collect(),
        }
    }
}

impl CategoriesConfig {
    /// Resolve the display label for a category code.
    ///
    /// Codes missing from the table fall back to a humanized form of the
    /// code itself.
    pub fn display_name(&self, category: &str) -> String {
        self.names
            .get(category)
            .cloned()
            .unwrap_or_else(|| upper_humanize(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_builtin_table() {
        let config = CategoriesConfig::default();
        assert_eq!(config.display_name("arc-7"), "Arc 7: ดินแดนแห่งหมาป่า");
        assert_eq!(config.display_name("ayamatsu"), "Ayamatsu: รูทเย่อหยิ่ง");
        assert_eq!(
            config.display_name("ex5"),
            "นิยายสปินออฟ EX5 \"ตำนานเจ้าหญิงสีชาด\""
        );
        assert_eq!(config.names.len(), 8);
    }

    #[test]
    fn test_unknown_code_humanized() {
        let config = CategoriesConfig::default();
        assert_eq!(config.display_name("unknown-code"), "Unknown Code");
        assert_eq!(config.display_name("side-story"), "Side Story");
    }

    #[test]
    fn test_defaults_via_config() {
        let config = test_parse_config("");
        assert_eq!(config.categories.order[0], "arc-7");
        assert_eq!(
            config.categories.display_name("tsugihagu"),
            "Tsugihagu: รูทตะกละ"
        );
    }

    #[test]
    fn test_table_overridable() {
        let config = test_parse_config(
            "[categories]\norder = [\"arc-7\"]\n[categories.names]\n\"arc-7\" = \"Seventh Arc\"",
        );
        assert_eq!(config.categories.display_name("arc-7"), "Seventh Arc");
        // Overriding replaces the whole table; absent codes humanize
        assert_eq!(config.categories.display_name("ayamatsu"), "Ayamatsu");
    }
}
