//! `[site]` configuration.
//!
//! Basic site information shared by listing output and feed-facing
//! callers.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Site description.
    pub description: String,

    /// Site URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Language code (e.g., "en", "th").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url`, when set, must parse as a URL with an http(s) scheme and a host
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(url_str) = &self.url else {
            return Ok(());
        };

        let parsed = url::Url::parse(url_str).map_err(|e| {
            ConfigError::Validation(format!("site.url is not a valid URL: {e}"))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "site.url scheme '{}' not supported, must be http or https",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(ConfigError::Validation(
                "site.url must have a valid host".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "Test");
        assert_eq!(config.site.language, "en");
        assert!(config.site.url.is_none());
    }

    #[test]
    fn test_url_validation() {
        let mut site = SiteInfoConfig::default();
        assert!(site.validate().is_ok());

        site.url = Some("https://example.com".into());
        assert!(site.validate().is_ok());

        site.url = Some("ftp://example.com".into());
        assert!(site.validate().is_err());

        site.url = Some("not a url".into());
        assert!(site.validate().is_err());
    }

    #[test]
    fn test_parse_fields() {
        let config = test_parse_config("author = \"Natsuki\"\nlanguage = \"th\"");
        assert_eq!(config.site.author, "Natsuki");
        assert_eq!(config.site.language, "th");
    }
}
