//! `[content]` configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content directory path (relative to project root).
    pub dir: PathBuf,
    /// Maximum characters in listing excerpts.
    pub summary_length: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content"),
            summary_length: 160,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.content.dir, Path::new("content"));
        assert_eq!(config.content.summary_length, 160);
    }

    #[test]
    fn test_overrides() {
        let config = test_parse_config("[content]\ndir = \"posts\"\nsummary_length = 80");
        assert_eq!(config.content.dir, Path::new("posts"));
        assert_eq!(config.content.summary_length, 80);
    }
}
