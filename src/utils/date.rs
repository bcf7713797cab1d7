//! Publish date parsing and formatting.
//!
//! Frontmatter dates are free-form strings; these helpers accept the common
//! shapes (`2024-01-01`, `2024-01-01T10:00:00`, RFC 3339) and treat dates
//! without an offset as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Parse a publish date. Returns `None` for unrecognized input.
pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// RFC 1123 form used by rss `pubDate`: `Mon, 01 Jan 2024 00:00:00 GMT`.
pub fn to_rfc1123(dt: DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// ISO 8601 with milliseconds: `2024-01-01T00:00:00.000Z`.
pub fn to_iso(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Human form for post listings: `1 Jan 2024`.
pub fn to_display(dt: DateTime<Utc>) -> String {
    dt.format("%-d %b %Y").to_string()
}
