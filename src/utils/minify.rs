//! Minification utilities for HTML and XML.
//!
//! Provides a unified `minify` function that handles both HTML and XML,
//! with automatic enable/disable based on `SiteConfig`.

use crate::config::SiteConfig;
use quick_xml::{
    Reader, Writer,
    events::{BytesText, Event},
};
use std::borrow::Cow;

// ============================================================================
// Types
// ============================================================================

/// Content type for minification.
pub enum MinifyType<'a> {
    /// HTML content
    Html(&'a [u8]),
    /// XML content
    Xml(&'a [u8]),
}

// ============================================================================
// Unified Minify Function
// ============================================================================

/// Minify content based on type and config.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify<'a>(content: MinifyType<'a>, config: &SiteConfig) -> Cow<'a, [u8]> {
    if !config.build.minify {
        match content {
            MinifyType::Html(html) => Cow::Borrowed(html),
            MinifyType::Xml(xml) => Cow::Borrowed(xml),
        }
    } else {
        match content {
            MinifyType::Html(html) => Cow::Owned(minify_html_inner(html)),
            MinifyType::Xml(xml) => Cow::Owned(minify_xml_inner(xml)),
        }
    }
}

// ============================================================================
// Internal Implementation
// ============================================================================

/// Minify HTML content using `minify_html` crate.
///
/// Expects a document without doctype; callers prepend it afterwards.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = false;
    minify_html::minify(html, &cfg)
}

/// Minify XML by dropping whitespace-only text between markup.
///
/// Text and CDATA content is copied untouched. Whitespace next to an entity
/// reference is content (`&amp; &amp;`), so it is kept. Input that fails to
/// parse is returned as is.
fn minify_xml_inner(xml: &[u8]) -> Vec<u8> {
    let mut reader = Reader::from_reader(xml);
    let mut writer = Writer::new(Vec::with_capacity(xml.len()));

    // Whitespace waiting to learn what follows it
    let mut pending: Option<BytesText> = None;
    let mut after_markup = true;

    loop {
        let event = match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => event,
            Err(_) => return xml.to_vec(),
        };

        if let Event::Text(text) = &event
            && text.iter().all(u8::is_ascii_whitespace)
        {
            pending = Some(text.clone());
            continue;
        }

        let is_ref = matches!(event, Event::GeneralRef(_));
        if let Some(space) = pending.take()
            && (is_ref || !after_markup)
            && writer.write_event(Event::Text(space)).is_err()
        {
            return xml.to_vec();
        }

        after_markup = !matches!(event, Event::Text(_) | Event::GeneralRef(_));
        if writer.write_event(event).is_err() {
            return xml.to_vec();
        }
    }

    writer.into_inner()
}

// ============================================================================
// Tests
// ============================================================================
