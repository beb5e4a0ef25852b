//! Unified feed model
//!
//! Dialect-agnostic result of a successful parse. Both types are plain
//! owned value objects: a `Feed` exclusively owns its items, nothing keeps
//! a reference into the XML tree, and no mutation happens after extraction.

use chrono::{DateTime, Utc};

/// A parsed feed, independent of the source dialect
///
/// Title and link are guaranteed non-empty; construction fails with
/// [`FieldMissing`](crate::FeedError::FieldMissing) otherwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feed {
    /// Feed title
    pub title: String,

    /// Canonical feed URL
    pub link: String,

    /// Feed-level description; empty when the source provides none
    pub description: String,

    /// Items in document order
    pub items: Vec<Item>,

    /// Number of items discarded because no id could be resolved
    ///
    /// Always zero under [`ParseOptions::strict`](crate::ParseOptions::strict),
    /// where an unidentifiable item fails the whole parse instead.
    pub dropped_items: usize,
}

/// A single feed entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Stable identifier: Atom `id`, RSS `guid` (else `link`),
    /// RDF `rdf:about` (else `link`)
    pub id: String,

    /// Item title
    pub title: Option<String>,

    /// Item URL
    pub link: Option<String>,

    /// Publication or update time; absent when missing or unparseable
    pub updated_at: Option<DateTime<Utc>>,

    /// Author name
    pub author: Option<String>,

    /// Item body as raw markup, not sanitized
    pub content: Option<String>,
}
