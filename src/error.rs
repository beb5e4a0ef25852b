//! Feed parsing error types

use thiserror::Error;

/// Feed classification and extraction errors
///
/// The three fatal kinds are deliberately distinct so callers can tell
/// "broken XML" (`MalformedDocument`) from "not a feed" (`UnknownDialect`)
/// from "broken feed" (`FieldMissing`). An unparseable date is not an error
/// at all; it degrades to an absent timestamp during extraction.
#[derive(Error, Debug)]
pub enum FeedError {
    /// IO error while reading a file or stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The XML layer could not produce a document tree
    #[error("malformed document{}: {detail}", fmt_source(.source_name))]
    MalformedDocument {
        /// Path or stream name, when one was supplied
        source_name: Option<String>,
        /// Underlying XML error text
        detail: String,
    },

    /// The root element matched none of the accepted feed grammars
    #[error("unknown feed dialect{}: root element <{root}>", fmt_source(.source_name))]
    UnknownDialect {
        /// Path or stream name, when one was supplied
        source_name: Option<String>,
        /// Qualified name of the offending root element
        root: String,
    },

    /// A required field could not be resolved by any candidate
    #[error("missing required field `{field}` in {scope}")]
    FieldMissing {
        /// Logical field name (e.g. `title`, `link`, `id`)
        field: &'static str,
        /// Where the field was expected (e.g. `RSS channel`, `Atom entry`)
        scope: &'static str,
    },
}

fn fmt_source(source_name: &Option<String>) -> String {
    match source_name {
        Some(name) => format!(" ({name})"),
        None => String::new(),
    }
}

/// Result type alias using FeedError
pub type Result<T> = std::result::Result<T, FeedError>;
