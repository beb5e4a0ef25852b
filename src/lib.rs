#![doc = include_str!("../README.md")]

/// Dialect classification for parsed documents
pub mod dialect;
mod error;
/// RSS / Atom / RDF field extraction
pub mod extract;
/// Unified Feed/Item model
pub mod model;
mod parser;
/// Candidate-list field resolution and date parsing
pub mod resolve;
/// XML tree adapter over quick-xml
pub mod xml;

pub use dialect::{classify, Dialect};
pub use error::{FeedError, Result};
pub use model::{Feed, Item};
pub use parser::{parse, parse_file, parse_reader, parse_with, ParseOptions};
pub use resolve::{parse_date, resolve, resolve_all, Lookup};
pub use xml::{parse_document, Element};
