//! Atom extraction
//!
//! The root `feed` node is itself the channel. Links are repeated elements
//! carrying their value in an `href` attribute, with `rel` distinguishing
//! representations. Reference: https://datatracker.ietf.org/doc/html/rfc4287

use tracing::warn;

use crate::model::{Feed, Item};
use crate::parser::ParseOptions;
use crate::resolve::{parse_date, resolve, resolve_all, Lookup};
use crate::xml::Element;
use crate::{FeedError, Result};

// Atom allows type-variant titles, but in practice feeds carry a single
// representation; one text candidate covers the vocabulary.
const FEED_TITLE: &[Lookup] = &[Lookup::ChildText("title")];
const FEED_SUBTITLE: &[Lookup] = &[Lookup::ChildText("subtitle")];

const ITEM_ID: &[Lookup] = &[Lookup::ChildText("id")];
const ITEM_TITLE: &[Lookup] = &[Lookup::ChildText("title")];
const ITEM_DATE: &[Lookup] = &[Lookup::ChildText("updated"), Lookup::ChildText("published")];
const ITEM_CONTENT: &[Lookup] = &[Lookup::ChildText("content"), Lookup::ChildText("summary")];

pub(super) fn extract(root: &Element, options: &ParseOptions) -> Result<Feed> {
    let title = resolve(root, FEED_TITLE).ok_or(FeedError::FieldMissing {
        field: "title",
        scope: "Atom feed",
    })?;
    let link = alternate_link(root).ok_or(FeedError::FieldMissing {
        field: "link",
        scope: "Atom feed",
    })?;
    let description = resolve(root, FEED_SUBTITLE).unwrap_or_default();

    let mut items = Vec::new();
    let mut dropped_items = 0;
    for node in resolve_all(root, "entry") {
        match extract_entry(node) {
            Some(item) => items.push(item),
            None if options.fail_on_invalid_items => {
                return Err(FeedError::FieldMissing {
                    field: "id",
                    scope: "Atom entry",
                });
            }
            None => {
                dropped_items += 1;
                warn!("dropping Atom entry without id");
            }
        }
    }

    Ok(Feed {
        title,
        link,
        description,
        items,
        dropped_items,
    })
}

fn extract_entry(node: &Element) -> Option<Item> {
    let id = resolve(node, ITEM_ID)?;

    Some(Item {
        id,
        title: resolve(node, ITEM_TITLE),
        link: alternate_link(node),
        updated_at: resolve(node, ITEM_DATE).and_then(|raw| parse_date(&raw)),
        author: author(node),
        content: resolve(node, ITEM_CONTENT),
    })
}

/// Pick the canonical link among repeated `link` elements
///
/// Prefers `rel="alternate"`; when no link is marked, the first one stands
/// in (an absent `rel` means alternate in Atom anyway).
fn alternate_link(node: &Element) -> Option<String> {
    let links = resolve_all(node, "link");
    links
        .iter()
        .find(|link| link.attr("rel") == Some("alternate"))
        .or_else(|| links.first())
        .and_then(|link| link.attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}

/// Author name from the nested `author > name` construct
///
/// Falls back to the author element's direct text for feeds that skip the
/// inner `name` element.
fn author(node: &Element) -> Option<String> {
    let author = node.child("author")?;
    let name = author
        .child("name")
        .map(|name| name.text.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    name.or_else(|| {
        let direct = author.text.trim();
        (!direct.is_empty()).then(|| direct.to_string())
    })
}
