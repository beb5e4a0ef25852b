//! Candidate-list field resolution
//!
//! Every dialect extractor reads its logical fields through [`resolve`],
//! handing it an ordered list of [`Lookup`] candidates. Making the fallback
//! order an explicit data structure (instead of inline conditional chains)
//! keeps each dialect's field mapping reviewable and testable on its own.

use chrono::{DateTime, NaiveDate, Utc};

use crate::xml::Element;

/// One way of locating a field value relative to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Text content of the first child element with this qualified name
    ChildText(&'static str),
    /// An attribute of the first child element with this qualified name
    ChildAttr(&'static str, &'static str),
    /// An attribute on the node itself
    Attr(&'static str),
}

/// Resolve the first candidate yielding a non-empty value
///
/// Candidates are evaluated strictly in order. A candidate whose element or
/// attribute is present but empty (after trimming surrounding whitespace)
/// advances to the next candidate exactly like an absent one. No match is
/// `None`, never an error; callers decide whether absence is fatal.
///
/// # Example
///
/// ```
/// use syndic_rs::xml::parse_document;
/// use syndic_rs::resolve::{resolve, Lookup};
///
/// let item = parse_document("<item><link>https://example.com/1</link></item>", None).unwrap();
/// let id = resolve(&item, &[Lookup::ChildText("guid"), Lookup::ChildText("link")]);
/// assert_eq!(id.as_deref(), Some("https://example.com/1"));
/// ```
pub fn resolve(node: &Element, candidates: &[Lookup]) -> Option<String> {
    for candidate in candidates {
        let raw = match candidate {
            Lookup::ChildText(name) => node.child(name).map(|child| child.text.as_str()),
            Lookup::ChildAttr(name, attr) => node.child(name).and_then(|child| child.attr(attr)),
            Lookup::Attr(name) => node.attr(name),
        };

        if let Some(value) = raw {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }

    None
}

/// All child elements with the given qualified name, in document order
///
/// For list-valued fields the caller picks the element itself; Atom uses
/// this to prefer the `rel="alternate"` link over other representations.
pub fn resolve_all<'a>(node: &'a Element, name: &str) -> Vec<&'a Element> {
    node.children.iter().filter(|child| child.name == name).collect()
}

/// Parse a feed date from any of the dialects' formats
///
/// Tries RFC 2822 (RSS `pubDate`), then RFC 3339 (Atom `updated`, RDF
/// `dc:date`), then a bare `YYYY-MM-DD`. Some feeds spell the zone `GMT`
/// instead of a numeric offset; that variation is normalized before giving
/// up on RFC 2822. An unrecognized format returns `None` rather than an
/// error; update timestamps are always optional in the model.
///
/// # Examples
///
/// ```
/// use syndic_rs::parse_date;
/// use chrono::Datelike;
///
/// let date = parse_date("Tue, 20 Jan 2026 12:00:00 +0000").unwrap();
/// assert_eq!(date.year(), 2026);
///
/// parse_date("2026-01-20T12:00:00Z").unwrap();
/// parse_date("Tue, 20 Jan 2026 12:00:00 GMT").unwrap();
/// assert!(parse_date("next tuesday").is_none());
/// ```
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    // Some feeds use "GMT" instead of "+0000"
    if trimmed.contains("GMT") {
        let normalized = trimmed.replace("GMT", "+0000");
        if let Ok(dt) = DateTime::parse_from_rfc2822(&normalized) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    // dc:date occasionally carries only a calendar date
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}
