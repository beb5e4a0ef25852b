//! XML tree adapter
//!
//! Builds an owned element tree on top of quick-xml's pull parser so the
//! dialect extractors can address children and attributes by qualified name.
//! Namespace prefixes are kept verbatim (`rdf:RDF`, `dc:creator`); no
//! namespace resolution happens here because the feed vocabularies are
//! matched by the prefixed names the specifications fix.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{FeedError, Result};

/// One element of a parsed document
///
/// Mixed content: `text` holds only the element's direct text and CDATA
/// nodes, concatenated in document order; text inside child elements stays
/// with those children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Qualified tag name as written in the source, prefix included
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Direct text and CDATA content
    pub text: String,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// First attribute with the given qualified name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child element with the given qualified name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All child elements with the given qualified name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }
}

/// Parse an XML document into its root element
///
/// `source_name` is a path or stream identifier threaded through only for
/// error messages. Any failure of the underlying parser, as well as a
/// truncated or empty document, surfaces as [`FeedError::MalformedDocument`].
///
/// # Example
///
/// ```
/// use syndic_rs::xml::parse_document;
///
/// let root = parse_document("<a x=\"1\"><b>hi</b></a>", None).unwrap();
/// assert_eq!(root.name, "a");
/// assert_eq!(root.attr("x"), Some("1"));
/// assert_eq!(root.child("b").unwrap().text, "hi");
/// ```
pub fn parse_document(xml: &str, source_name: Option<&str>) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let malformed = |detail: String| FeedError::MalformedDocument {
        source_name: source_name.map(str::to_owned),
        detail,
    };

    // Open elements, innermost last. Closed elements attach to the parent
    // below them, or become the root when the stack empties.
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(malformed("multiple root elements".to_string()));
                }
                stack.push(open_element(e));
            }
            Ok(Event::Empty(ref e)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(malformed("multiple root elements".to_string()));
                }
                attach(open_element(e), &mut stack, &mut root);
            }
            Ok(Event::End(_)) => {
                // quick-xml has already verified the end name matches
                match stack.pop() {
                    Some(element) => attach(element, &mut stack, &mut root),
                    None => return Err(malformed("unexpected closing tag".to_string())),
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(malformed(e.to_string())),
            _ => {}
        }

        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(malformed(format!("unclosed element <{}>", open.name)));
    }

    root.ok_or_else(|| malformed("document has no root element".to_string()))
}

fn open_element(start: &BytesStart<'_>) -> Element {
    let mut attributes = Vec::new();
    for attr in start.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value().unwrap_or_default().to_string();
        attributes.push((key, value));
    }

    Element {
        name: String::from_utf8_lossy(start.name().as_ref()).to_string(),
        attributes,
        text: String::new(),
        children: Vec::new(),
    }
}

fn attach(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}
