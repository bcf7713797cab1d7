//! Markdown evaluation for posts.
//!
//! Three steps over one pulldown-cmark event stream:
//!
//! ```text
//! source ──► Parser (GFM + YAML metadata blocks)
//!               │
//!               ├── extract_frontmatter() ──► frontmatter text
//!               │
//!               └── Highlighter::highlight_events() ──► push_html() ──► body HTML
//! ```
//!
//! The frontmatter is returned next to the remaining events instead of
//! being smuggled out of the traversal, so callers see both results at once.

use crate::utils::highlight::Highlighter;
use anyhow::Result;
use pulldown_cmark::{Event, MetadataBlockKind, Options, Parser, Tag, TagEnd, html::push_html};

/// Output of the frontmatter transform.
pub struct Extracted<'a> {
    /// Events with the metadata block removed.
    pub events: Vec<Event<'a>>,
    /// Raw YAML text of the leading metadata block, if there was one.
    pub frontmatter: Option<String>,
}

/// Evaluated markdown document.
#[derive(Debug)]
pub struct Rendered {
    pub html: String,
    pub frontmatter: Option<String>,
}

/// Parser options: GitHub-flavored extensions plus `---` YAML blocks.
fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
}

/// Pull the YAML metadata block out of an event stream.
pub fn extract_frontmatter<'a>(events: impl IntoIterator<Item = Event<'a>>) -> Extracted<'a> {
    let mut out = Vec::new();
    let mut frontmatter: Option<String> = None;
    let mut in_block = false;

    for event in events {
        match event {
            Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                in_block = true;
                frontmatter.get_or_insert_with(String::new);
            }
            Event::End(TagEnd::MetadataBlock(MetadataBlockKind::YamlStyle)) => in_block = false,
            Event::Text(text) if in_block => {
                if let Some(yaml) = frontmatter.as_mut() {
                    yaml.push_str(&text);
                }
            }
            event => out.push(event),
        }
    }

    Extracted {
        events: out,
        frontmatter,
    }
}

/// Markdown renderer with code highlighting.
pub struct Markdown {
    highlighter: Highlighter,
}

impl Markdown {
    pub const fn new(highlighter: Highlighter) -> Self {
        Self { highlighter }
    }

    /// Render `source` to HTML, returning the captured frontmatter alongside.
    pub fn render(&self, source: &str) -> Result<Rendered> {
        let Extracted {
            events,
            frontmatter,
        } = extract_frontmatter(Parser::new_ext(source, options()));

        let events = self.highlighter.highlight_events(events)?;

        let mut html = String::with_capacity(source.len() * 2);
        push_html(&mut html, events.into_iter());

        Ok(Rendered { html, frontmatter })
    }
}
