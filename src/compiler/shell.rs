//! HTML document shell shared by pages and posts.
//!
//! ```text
//! <html lang="en">
//!   <head>  title, canonical, icons, SEO + og meta, stylesheet,
//!           BlogPosting json-ld (posts only), rss alternate
//!   <body>  layout({children})
//! ```

use super::{meta::DEFAULT_KEYWORDS, meta::Post, route::Route};
use crate::{
    config::SiteConfig,
    utils::{
        minify::{MinifyType, minify},
        xml::{
            XmlWriter, create_xml_writer, into_string, write_empty_elem, write_end, write_raw,
            write_start, write_text_element,
        },
    },
};
use anyhow::{Context, Result};
use serde_json::json;
use std::{fs, path::Path};

pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// What a document renders.
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    /// A page; the slug is empty for the index page.
    Page { slug: &'a str },
    Post(&'a Post),
}

impl Subject<'_> {
    fn title(&self, config: &SiteConfig) -> String {
        let site = &config.base.title;
        match self {
            Subject::Page { slug } if slug.is_empty() => site.clone(),
            Subject::Page { slug } => format!("{slug} | {site}"),
            Subject::Post(post) => format!("{} | {site}", post.title),
        }
    }

    fn description<'a>(&'a self, config: &'a SiteConfig) -> &'a str {
        match self {
            Subject::Post(post) => &post.summary,
            Subject::Page { .. } => &config.base.description,
        }
    }

    fn keywords(&self) -> &str {
        match self {
            Subject::Post(post) => post.keywords(),
            Subject::Page { .. } => DEFAULT_KEYWORDS,
        }
    }
}

/// Render a full document (without doctype) around `children`.
pub fn render(config: &SiteConfig, route: &Route, subject: Subject, children: &str) -> Result<String> {
    let mut w = create_xml_writer();

    write_start(&mut w, "html", &[("lang", config.base.lang())])?;
    write_head(&mut w, config, route, subject)?;

    write_start(&mut w, "body", &[])?;
    write_raw(&mut w, &config.layout.render(children))?;
    write_end(&mut w, "body")?;

    write_end(&mut w, "html")?;
    into_string(w)
}

fn write_head(w: &mut XmlWriter, config: &SiteConfig, route: &Route, subject: Subject) -> Result<()> {
    let title = subject.title(config);
    let description = subject.description(config);
    let keywords = subject.keywords();
    let url = route.url.as_str();
    let og_type = match subject {
        Subject::Post(_) => "article",
        Subject::Page { .. } => "website",
    };

    write_start(w, "head", &[])?;
    write_text_element(w, "title", &title)?;
    write_empty_elem(w, "link", &[("rel", "canonical"), ("href", url)])?;

    write_empty_elem(
        w,
        "meta",
        &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
    )?;
    write_empty_elem(w, "link", &[("rel", "icon"), ("href", "/favicon.ico")])?;
    write_empty_elem(w, "link", &[("rel", "manifest"), ("href", "/site.webmanifest")])?;

    for (name, content) in [
        ("title", title.as_str()),
        ("description", description),
        ("keywords", keywords),
        ("author", config.base.author.as_str()),
    ] {
        write_empty_elem(w, "meta", &[("name", name), ("content", content)])?;
    }
    for (property, content) in [
        ("og:type", og_type),
        ("og:url", url),
        ("og:title", title.as_str()),
        ("og:description", description),
    ] {
        write_empty_elem(w, "meta", &[("property", property), ("content", content)])?;
    }

    write_empty_elem(w, "link", &[("href", "/styles.css"), ("rel", "stylesheet")])?;

    if let Subject::Post(post) = subject {
        write_start(w, "script", &[("type", "application/ld+json")])?;
        write_raw(w, &structured_data(config, post, url)?)?;
        write_end(w, "script")?;
    }

    write_empty_elem(
        w,
        "link",
        &[
            ("rel", "alternate"),
            ("type", "application/rss+xml"),
            ("title", "RSS 2.0"),
            ("href", "/feed.rss"),
        ],
    )?;
    write_end(w, "head")
}

/// schema.org `BlogPosting` for a post, safe to inline in a `<script>`.
fn structured_data(config: &SiteConfig, post: &Post, url: &str) -> Result<String> {
    let data = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "url": url,
        "datePublished": post.published_at,
        "dateCreated": post.published_at,
        "dateModified": post.published_at,
        "keywords": post.keywords().replace(',', ""),
        "description": post.summary,
        "author": {
            "@type": "Person",
            "name": config.base.author,
        },
    });
    Ok(serde_json::to_string(&data)?.replace("</", "<\\/"))
}

/// Write `<!DOCTYPE html>` + `html` to `path`, minified when configured.
pub fn write_document(path: &Path, html: &str, config: &SiteConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let body = minify(MinifyType::Html(html.as_bytes()), config);
    let mut out = Vec::with_capacity(DOCTYPE.len() + body.len());
    out.extend_from_slice(DOCTYPE.as_bytes());
    out.extend_from_slice(&body);

    fs::write(path, out).with_context(|| format!("Failed to write {}", path.display()))
}
