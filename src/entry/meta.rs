//! Entry metadata from YAML or TOML frontmatter.

use serde::{Deserialize, Serialize};

use super::JsonMap;

/// Deserialize categories, treating `null` as empty vec
fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Entry metadata from frontmatter in Markdown files
///
/// # Standard Fields
///
/// | Field        | Type           | Description                     |
/// |--------------|----------------|---------------------------------|
/// | `title`      | `String`       | Entry title                     |
/// | `summary`    | `String`       | Brief description (markdown)    |
/// | `date`       | `String`       | Publication date                |
/// | `image`      | `String`       | Card image path                 |
/// | `image-alt`  | `String`       | Card image alt text             |
/// | `categories` | `Vec<String>`  | Arc/route category codes        |
/// | `draft`      | `bool`         | Draft status (default: false)   |
///
/// # Custom Fields (`extra`)
///
/// Any additional fields are captured in `extra` as raw JSON and carried
/// through to serialized listing output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EntryMeta {
    pub title: Option<String>,
    /// Summary shown on listing cards (markdown source).
    pub summary: Option<String>,
    pub date: Option<String>,
    /// Card image path, relative to the site's asset root.
    pub image: Option<String>,
    pub image_alt: Option<String>,
    /// Arc/route category codes this entry belongs to.
    #[serde(default, deserialize_with = "deserialize_categories")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub draft: bool,
    /// Additional user-defined fields (raw JSON).
    #[serde(flatten, default)]
    pub extra: JsonMap,
}
