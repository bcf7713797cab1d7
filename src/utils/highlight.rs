//! Syntax highlighting for fenced code blocks, backed by syntect.

use anyhow::{Context, Result, anyhow};
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use std::path::Path;
use syntect::{
    highlighting::{Theme, ThemeSet},
    html::highlighted_html_for_string,
    parsing::SyntaxSet,
};

/// Code highlighter bound to one theme.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    /// Load a highlighter for `theme`: a built-in theme name, or a path to a
    /// `.tmTheme` file (resolved against `root`).
    pub fn new(theme: &str, root: &Path) -> Result<Self> {
        let theme = if theme.ends_with(".tmTheme") {
            let path = root.join(theme);
            ThemeSet::get_theme(&path)
                .with_context(|| format!("Failed to load theme {}", path.display()))?
        } else {
            let mut themes = ThemeSet::load_defaults().themes;
            // `remove` rather than `get` to take an owned `Theme`
            match themes.remove(theme) {
                Some(theme) => theme,
                None => {
                    let known: Vec<_> = themes.keys().map(String::as_str).collect();
                    return Err(anyhow!(
                        "unknown theme `{theme}`, expected one of: {}",
                        known.join(", ")
                    ));
                }
            }
        };

        Ok(Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Highlight `code` as `language`, falling back to plain text for
    /// missing or unknown languages.
    pub fn highlight(&self, code: &str, language: Option<&str>) -> Result<String> {
        let syntax = language
            .and_then(|lang| self.syntaxes.find_syntax_by_token(lang))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

        highlighted_html_for_string(code, &self.syntaxes, syntax, &self.theme).map_err(Into::into)
    }

    /// Replace every code block in the event stream with highlighted HTML.
    pub fn highlight_events<'a>(&self, events: Vec<Event<'a>>) -> Result<Vec<Event<'a>>> {
        let mut out = Vec::with_capacity(events.len());
        let mut block: Option<(Option<String>, String)> = None;

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) if block.is_none() => {
                    block = Some((fence_language(&kind), String::new()));
                }
                Event::Text(text) if block.is_some() => {
                    if let Some((_, code)) = block.as_mut() {
                        code.push_str(&text);
                    }
                }
                Event::End(TagEnd::CodeBlock) if block.is_some() => {
                    if let Some((language, code)) = block.take() {
                        let html = self.highlight(&code, language.as_deref())?;
                        out.push(Event::Html(CowStr::from(html)));
                    }
                }
                event => out.push(event),
            }
        }

        Ok(out)
    }
}

/// Language token of a fenced block: "rust,ignore title=x" → "rust".
fn fence_language(kind: &CodeBlockKind<'_>) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info
            .split([',', ' ', '\t'])
            .next()
            .filter(|lang| !lang.is_empty())
            .map(str::to_owned),
        CodeBlockKind::Indented => None,
    }
}
