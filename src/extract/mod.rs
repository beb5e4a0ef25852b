//! Dialect-specific field extraction
//!
//! Three independent implementations of one contract: take a classified
//! document root and produce the unified [`Feed`] model. Each extractor
//! encodes its dialect's tag names, nesting and fallback order as candidate
//! lists; the shared resolution machinery lives in [`crate::resolve`].

mod atom;
mod rdf;
mod rss;

use crate::dialect::Dialect;
use crate::model::Feed;
use crate::parser::ParseOptions;
use crate::xml::Element;
use crate::Result;

/// Run the extractor for a classified dialect
pub fn extract(root: &Element, dialect: Dialect, options: &ParseOptions) -> Result<Feed> {
    match dialect {
        Dialect::Rss2 => rss::extract(root, options),
        Dialect::Atom => atom::extract(root, options),
        Dialect::Rdf => rdf::extract(root, options),
    }
}
