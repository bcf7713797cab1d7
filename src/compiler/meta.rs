//! Post metadata.
//!
//! A [`Post`] is parsed from the YAML frontmatter of a post source file,
//! then completed with its slug (the file stem). The same record feeds
//! `posts.json`, the rss feed and the structured data of the post page.
//! Keys beyond the modeled ones are carried through to `posts.json`.
//!
//! Drafts are recognized before any field is checked, so a draft only needs
//! well-formed YAML.
//!
//! ```yaml
//! ---
//! title: Hello
//! publishedAt: 2024-01-01
//! summary: First post
//! tags: rust, blogging
//! draft: false
//! ---
//! ```

use crate::utils::date;
use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::{collections::BTreeMap, path::PathBuf};
use thiserror::Error;

/// Problems with the content of a source file.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("`{0}` has no frontmatter block (expected a leading `---` YAML block)")]
    MissingFrontmatter(PathBuf),

    #[error("invalid frontmatter in `{0}`")]
    Frontmatter(PathBuf, #[source] serde_yaml::Error),

    #[error("`{path}` has an unrecognized publishedAt date `{value}`")]
    PublishedAt { path: PathBuf, value: String },

    #[error("page `{0}` renders nothing")]
    EmptyPage(String),
}

/// One compiled blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub published_at: String,
    /// File stem of the source; never taken from frontmatter.
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    /// Any other frontmatter keys, in key order.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Post {
    /// Parse frontmatter YAML; `None` for drafts.
    ///
    /// `source` is only used for error messages.
    pub fn from_frontmatter(yaml: &str, source: PathBuf) -> Result<Option<Self>, ContentError> {
        let invalid = |e| ContentError::Frontmatter(source.clone(), e);

        let value: Value = serde_yaml::from_str(yaml).map_err(invalid)?;
        if value.get("draft").and_then(Value::as_bool).unwrap_or(false) {
            return Ok(None);
        }

        let post: Post = serde_yaml::from_value(value).map_err(invalid)?;
        if date::parse(&post.published_at).is_none() {
            return Err(ContentError::PublishedAt {
                path: source,
                value: post.published_at,
            });
        }
        Ok(Some(post))
    }

    /// Parsed publish timestamp.
    pub fn published(&self) -> Result<DateTime<Utc>> {
        date::parse(&self.published_at)
            .ok_or_else(|| anyhow!("`{}` has an invalid publishedAt date", self.slug))
    }

    /// Keywords for meta tags and structured data.
    pub fn keywords(&self) -> &str {
        if self.tags.is_empty() {
            DEFAULT_KEYWORDS
        } else {
            &self.tags
        }
    }
}

/// Keywords used when a page has no tags of its own.
pub const DEFAULT_KEYWORDS: &str = "tech, development";
