//! Sitemap generation.
//!
//! Lists every URL emitted by the compilers, in emission order.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" ...>
//!   <url>
//!     <loc>https://example.com</loc>
//!     <lastmod>2025-01-01T00:00:00.000Z</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    log,
    utils::{
        date,
        minify::{MinifyType, minify},
        xml::escape_xml,
    },
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;

// ============================================================================
// Constants
// ============================================================================

/// Output file name inside the output directory.
pub const SITEMAP: &str = "sitemap.xml";

/// Namespaces declared on `<urlset>`.
const NAMESPACES: &[(&str, &str)] = &[
    ("xmlns", "http://www.sitemaps.org/schemas/sitemap/0.9"),
    ("xmlns:news", "http://www.google.com/schemas/sitemap-news/0.9"),
    ("xmlns:xhtml", "http://www.w3.org/1999/xhtml"),
    ("xmlns:image", "http://www.google.com/schemas/sitemap-image/1.1"),
    ("xmlns:video", "http://www.google.com/schemas/sitemap-video/1.1"),
];

// ============================================================================
// Public API
// ============================================================================

/// Write `<output>/sitemap.xml`, stamping every entry with `now`.
pub fn build_sitemap(config: &SiteConfig, urls: &[String], now: DateTime<Utc>) -> Result<()> {
    let xml = Sitemap::new(urls, now).into_xml();
    let xml = minify(MinifyType::Xml(xml.as_bytes()), config);

    let path = config.build.output.join(SITEMAP);
    fs::write(&path, &*xml)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{} urls", urls.len());
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

struct Sitemap<'a> {
    urls: &'a [String],
    lastmod: String,
}

impl<'a> Sitemap<'a> {
    fn new(urls: &'a [String], now: DateTime<Utc>) -> Self {
        Self {
            urls,
            lastmod: date::to_iso(now),
        }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 128);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str("<urlset");
        for (name, ns) in NAMESPACES {
            xml.push_str(&format!(r#" {name}="{ns}""#));
        }
        xml.push_str(">\n");

        for url in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(url)));
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", self.lastmod));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

// ============================================================================
// Tests
// ============================================================================
