//! `[base]` section configuration.
//!
//! Contains basic site information like title, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in reblog.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Blog"
/// description = "A personal blog about Rust"
/// author = "Alice"
/// url = "https://myblog.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, appended to every page title.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Author name for meta tags and structured data.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Site description for SEO meta tags and the rss channel.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,

    /// Base URL every public URL is derived from.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: String,

    /// BCP 47 language code (e.g., "en-US").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}

impl BaseConfig {
    /// Base URL without trailing slashes.
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Primary language subtag for `<html lang>` (e.g., "en-US" → "en").
    pub fn lang(&self) -> &str {
        self.language.split(['-', '_']).next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "Sample site"
            description = "some random blog"
            author = "Some Author"
            url = "https://www.example.site"
            language = "fr-FR"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Sample site");
        assert_eq!(config.base.description, "some random blog");
        assert_eq!(config.base.author, "Some Author");
        assert_eq!(config.base.url, "https://www.example.site");
        assert_eq!(config.base.language, "fr-FR");
    }

    #[test]
    fn test_base_config_defaults() {
        let config = r#"
            [base]
            url = "https://www.example.site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Blogging");
        assert_eq!(config.base.author, "The Writer");
        assert_eq!(config.base.description, "A great blog");
        assert_eq!(config.base.language, "en-US");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let config = r#"
            [base]
            url = "https://example.com/"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.base.url(), "https://example.com");
    }

    #[test]
    fn test_lang_subtag() {
        let mut config = SiteConfig::default();
        assert_eq!(config.base.lang(), "en");

        config.base.language = "zh_Hans".into();
        assert_eq!(config.base.lang(), "zh");

        config.base.language = "de".into();
        assert_eq!(config.base.lang(), "de");
    }

    #[test]
    fn test_base_config_unicode() {
        let config = r#"
            [base]
            title = "My Blog 🚀"
            author = "René"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "My Blog 🚀");
        assert_eq!(config.base.author, "René");
    }
}
