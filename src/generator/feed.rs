//! Feed generation.
//!
//! Builds an RSS 2.0 channel from the compiled posts, newest first, with an
//! atom `self` link pointing at the feed itself.

use crate::{
    compiler::{meta::Post, route::Route},
    config::SiteConfig,
    log,
    utils::{
        date,
        minify::{MinifyType, minify},
    },
};
use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use rss::{
    Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder,
    extension::atom::{AtomExtension, Link},
    validation::Validate,
};
use std::fs;

/// Output file name inside the output directory.
pub const FEED: &str = "feed.rss";

// ============================================================================
// Public API
// ============================================================================

/// Write `<output>/feed.rss` for `posts`.
pub fn build_feed(config: &SiteConfig, posts: &[Post]) -> Result<()> {
    let channel = RssFeed::new(config, posts)?.into_channel();
    channel
        .validate()
        .map_err(|e| anyhow!("rss validation failed: {e}"))?;

    let xml = channel.to_string();
    let xml = minify(MinifyType::Xml(xml.as_bytes()), config);

    let path = config.build.output.join(FEED);
    fs::write(&path, &*xml).with_context(|| format!("Failed to write {}", path.display()))?;

    log!("rss"; "{} items", posts.len());
    Ok(())
}

// ============================================================================
// RssFeed Implementation
// ============================================================================

struct RssFeed<'a> {
    config: &'a SiteConfig,
    /// Posts paired with their parsed publish time, newest first.
    posts: Vec<(&'a Post, DateTime<Utc>)>,
}

impl<'a> RssFeed<'a> {
    fn new(config: &'a SiteConfig, posts: &'a [Post]) -> Result<Self> {
        let mut posts = posts
            .iter()
            .map(|post| Ok((post, post.published()?)))
            .collect::<Result<Vec<_>>>()?;
        posts.sort_by(|(_, a), (_, b)| b.cmp(a));

        Ok(Self { config, posts })
    }

    fn into_channel(self) -> Channel {
        let base = &self.config.base;

        let mut self_link = Link::default();
        self_link.set_href(format!("{}/{FEED}", base.url()));
        self_link.set_rel("self");
        self_link.set_mime_type(Some("application/rss+xml".to_string()));

        let mut atom = AtomExtension::default();
        atom.set_links(vec![self_link]);

        let items: Vec<_> = self
            .posts
            .iter()
            .map(|&(post, published)| post_to_item(post, published, self.config))
            .collect();

        ChannelBuilder::default()
            .title(&base.title)
            .link(base.url())
            .description(&base.description)
            .language(base.language.clone())
            .atom_ext(atom)
            .items(items)
            .build()
    }
}

fn post_to_item(post: &Post, published: DateTime<Utc>, config: &SiteConfig) -> Item {
    let permalink = Route::post(&post.slug, config).permalink();

    ItemBuilder::default()
        .title(post.title.clone())
        .link(permalink.clone())
        .guid(GuidBuilder::default().permalink(true).value(permalink).build())
        .description(post.summary.clone())
        .pub_date(date::to_rfc1123(published))
        .build()
}
