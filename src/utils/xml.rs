//! Small helpers over `quick_xml::Writer` for emitting markup.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{Cursor, Write};

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

pub fn create_xml_writer() -> XmlWriter {
    Writer::new(Cursor::new(Vec::with_capacity(4096)))
}

/// Consume the writer and return its buffer as a string.
pub fn into_string(writer: XmlWriter) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Write an opening tag with attributes: `<tag attr1="val1" ...>`.
#[inline]
pub fn write_start(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Start(elem))?;
    Ok(())
}

/// Write a closing tag: `</tag>`.
#[inline]
pub fn write_end(writer: &mut XmlWriter, tag: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write escaped text content.
#[inline]
pub fn write_text(writer: &mut XmlWriter, text: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::new(text)))?;
    Ok(())
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
pub fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
pub fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write already-serialized markup as is (trusted input).
#[inline]
pub fn write_raw(writer: &mut XmlWriter, raw: &str) -> Result<()> {
    writer.get_mut().write_all(raw.as_bytes())?;
    Ok(())
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_write_elements() {
        let mut writer = create_xml_writer();
        write_start(&mut writer, "head", &[]).unwrap();
        write_text_element(&mut writer, "title", "Tom & Jerry").unwrap();
        write_empty_elem(&mut writer, "link", &[("rel", "canonical"), ("href", "/a?b=1&c=2")])
            .unwrap();
        write_raw(&mut writer, "<!-- raw -->").unwrap();
        write_end(&mut writer, "head").unwrap();

        let out = into_string(writer).unwrap();
        assert_eq!(
            out,
            r#"<head><title>Tom &amp; Jerry</title><link rel="canonical" href="/a?b=1&amp;c=2"/><!-- raw --></head>"#
        );
    }
}
