//! Dialect classification
//!
//! Decides which of the three accepted grammars applies to a parsed
//! document by inspecting its root element.

use crate::xml::Element;
use crate::{FeedError, Result};

/// The three accepted syndication grammars
///
/// A closed set: the variant list is fixed by specification, not extensible
/// at runtime, so extraction dispatches over this enum rather than through
/// open-ended polymorphism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// RSS 2.0 (`<rss>` root, items nested inside `<channel>`)
    Rss2,
    /// Atom (`<feed>` root)
    Atom,
    /// RDF/RSS 1.0 (`<rdf:RDF>` root, items siblings of `<channel>`)
    Rdf,
}

impl Dialect {
    /// Human-readable dialect name for logs and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Rss2 => "RSS 2.0",
            Dialect::Atom => "Atom",
            Dialect::Rdf => "RDF/RSS 1.0",
        }
    }
}

/// Classify a document by its root element
///
/// Well-formed feeds never legally share a root name across dialects, so
/// the match below is deterministic rather than a precedence rule. A root
/// matching none of the grammars is unambiguously
/// [`UnknownDialect`](FeedError::UnknownDialect).
///
/// # Example
///
/// ```
/// use syndic_rs::xml::parse_document;
/// use syndic_rs::{classify, Dialect};
///
/// let root = parse_document("<feed/>", None).unwrap();
/// assert_eq!(classify(&root, None).unwrap(), Dialect::Atom);
/// ```
pub fn classify(root: &Element, source_name: Option<&str>) -> Result<Dialect> {
    match root.name.as_str() {
        "rss" => Ok(Dialect::Rss2),
        "feed" => Ok(Dialect::Atom),
        "rdf:RDF" | "RDF" => Ok(Dialect::Rdf),
        other => Err(FeedError::UnknownDialect {
            source_name: source_name.map(str::to_owned),
            root: other.to_string(),
        }),
    }
}
