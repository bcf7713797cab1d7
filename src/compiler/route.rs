//! Output path and public URL of a compiled document.

use crate::config::SiteConfig;
use std::path::PathBuf;

/// Slug of the page that maps to the site root.
pub const INDEX: &str = "index";

/// Container a source file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Post,
    Page,
}

/// Where a document is written and where it is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// `<output>/…/index.html`
    pub path: PathBuf,
    /// Absolute public URL, no trailing slash.
    pub url: String,
}

impl Route {
    /// Map `slug` of `kind` to its route. An empty slug or the `index` page
    /// maps to the site root.
    pub fn new(slug: &str, kind: ContentKind, config: &SiteConfig) -> Self {
        let output = &config.build.output;
        let base = config.base.url();

        match kind {
            ContentKind::Page if slug.is_empty() || slug == INDEX => Self {
                path: output.join("index.html"),
                url: base.to_owned(),
            },
            ContentKind::Page => Self {
                path: output.join(slug).join("index.html"),
                url: format!("{base}/{slug}"),
            },
            ContentKind::Post => {
                let blog = &config.build.blog;
                Self {
                    path: output.join(blog).join(slug).join("index.html"),
                    url: format!("{base}/{blog}/{slug}"),
                }
            }
        }
    }

    pub fn post(slug: &str, config: &SiteConfig) -> Self {
        Self::new(slug, ContentKind::Post, config)
    }

    pub fn page(slug: &str, config: &SiteConfig) -> Self {
        Self::new(slug, ContentKind::Page, config)
    }

    /// Trailing-slash form used as the feed GUID.
    pub fn permalink(&self) -> String {
        format!("{}/", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config(url: &str) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.url = url.into();
        config.build.output = "/site/dist".into();
        config
    }

    #[test]
    fn test_post_route() {
        let route = Route::post("hello", &config("https://example.com"));
        assert_eq!(route.path, Path::new("/site/dist/blog/hello/index.html"));
        assert_eq!(route.url, "https://example.com/blog/hello");
        assert_eq!(route.permalink(), "https://example.com/blog/hello/");
    }

    #[test]
    fn test_page_route() {
        let route = Route::page("about", &config("https://example.com"));
        assert_eq!(route.path, Path::new("/site/dist/about/index.html"));
        assert_eq!(route.url, "https://example.com/about");
    }

    #[test]
    fn test_index_route() {
        let config = config("https://example.com");
        for slug in ["", INDEX] {
            let route = Route::page(slug, &config);
            assert_eq!(route.path, Path::new("/site/dist/index.html"));
            assert_eq!(route.url, "https://example.com");
        }
    }

    #[test]
    fn test_post_named_index_is_not_root() {
        let route = Route::post(INDEX, &config("https://example.com"));
        assert_eq!(route.url, "https://example.com/blog/index");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let route = Route::page("about", &config("https://example.com//"));
        assert_eq!(route.url, "https://example.com/about");
    }

    #[test]
    fn test_custom_blog_segment() {
        let mut config = config("https://example.com");
        config.build.blog = "notes".into();
        let route = Route::post("a", &config);
        assert_eq!(route.path, Path::new("/site/dist/notes/a/index.html"));
        assert_eq!(route.url, "https://example.com/notes/a");
    }
}
