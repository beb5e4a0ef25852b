//! Public parse entry points
//!
//! All three entry points reduce to the in-memory text path: read to
//! completion, build the tree, classify, extract. The source name (path or
//! stream identifier) is threaded through for error messages only.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::dialect::classify;
use crate::extract;
use crate::model::Feed;
use crate::xml::parse_document;
use crate::Result;

/// Extraction policy knobs
///
/// The only knob today is what to do with an item whose id cannot be
/// resolved even through its dialect's fallback chain.
///
/// # Examples
///
/// ```
/// use syndic_rs::ParseOptions;
///
/// // Default: drop unidentifiable items, count them in `dropped_items`
/// let lenient = ParseOptions::lenient();
/// assert_eq!(lenient, ParseOptions::default());
///
/// // Fail the whole parse instead
/// let strict = ParseOptions::strict();
/// assert!(strict.fail_on_invalid_items);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// If true, an item with no resolvable id fails the whole parse with
    /// `FieldMissing`. If false, the item is dropped and counted in
    /// [`Feed::dropped_items`](crate::Feed::dropped_items).
    pub fail_on_invalid_items: bool,
}

impl ParseOptions {
    /// Fail the whole feed when any item lacks a resolvable id
    pub fn strict() -> Self {
        Self {
            fail_on_invalid_items: true,
        }
    }

    /// Drop unidentifiable items and surface a count (the default)
    pub fn lenient() -> Self {
        Self {
            fail_on_invalid_items: false,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::lenient()
    }
}

/// Parse a feed from in-memory text
///
/// # Example
///
/// ```
/// use syndic_rs::parse;
///
/// let feed = parse(
///     "<rss><channel><title>T</title><link>L</link>\
///      <item><guid>1</guid><title>I</title></item></channel></rss>",
/// )
/// .unwrap();
/// assert_eq!(feed.title, "T");
/// assert_eq!(feed.items[0].id, "1");
/// ```
pub fn parse(xml: &str) -> Result<Feed> {
    parse_named(xml, None, &ParseOptions::default())
}

/// Parse a feed from in-memory text with explicit options
pub fn parse_with(xml: &str, options: &ParseOptions) -> Result<Feed> {
    parse_named(xml, None, options)
}

/// Parse a feed from a reader, draining it to completion first
///
/// `source_name` only decorates error messages.
pub fn parse_reader<R: Read>(mut reader: R, source_name: Option<&str>) -> Result<Feed> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_named(&raw, source_name, &ParseOptions::default())
}

/// Parse a feed from a file path
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Feed> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    parse_named(&raw, Some(&path.display().to_string()), &ParseOptions::default())
}

fn parse_named(xml: &str, source_name: Option<&str>, options: &ParseOptions) -> Result<Feed> {
    let root = parse_document(xml, source_name)?;
    let dialect = classify(&root, source_name)?;
    debug!("classified document as {}", dialect.name());

    let feed = extract::extract(&root, dialect, options)?;
    debug!(
        "extracted {} items ({} dropped)",
        feed.items.len(),
        feed.dropped_items
    );
    Ok(feed)
}
