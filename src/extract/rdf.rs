//! RDF/RSS 1.0 extraction
//!
//! Unlike RSS 2.0, the `channel` node here only carries feed metadata:
//! `item` nodes are siblings of the channel under the `rdf:RDF` root, not
//! children of it. That structural asymmetry is encoded explicitly below
//! instead of reusing the nested-items walk.
//! Reference: https://web.resource.org/rss/1.0/spec

use tracing::warn;

use crate::model::{Feed, Item};
use crate::parser::ParseOptions;
use crate::resolve::{parse_date, resolve, resolve_all, Lookup};
use crate::xml::Element;
use crate::{FeedError, Result};

const FEED_TITLE: &[Lookup] = &[Lookup::ChildText("title")];
const FEED_LINK: &[Lookup] = &[Lookup::ChildText("link")];
const FEED_DESCRIPTION: &[Lookup] = &[Lookup::ChildText("description")];

// The identifying attribute sits on the item node itself; the item link
// stands in when the document omits it
const ITEM_ID: &[Lookup] = &[
    Lookup::Attr("rdf:about"),
    Lookup::Attr("about"),
    Lookup::ChildText("link"),
];
const ITEM_TITLE: &[Lookup] = &[Lookup::ChildText("title")];
const ITEM_LINK: &[Lookup] = &[Lookup::ChildText("link")];
const ITEM_DATE: &[Lookup] = &[Lookup::ChildText("dc:date")];
const ITEM_AUTHOR: &[Lookup] = &[Lookup::ChildText("dc:creator")];
const ITEM_CONTENT: &[Lookup] = &[
    Lookup::ChildText("content:encoded"),
    Lookup::ChildText("description"),
];

pub(super) fn extract(root: &Element, options: &ParseOptions) -> Result<Feed> {
    let channel = root.child("channel").ok_or(FeedError::FieldMissing {
        field: "channel",
        scope: "RDF document",
    })?;

    let title = resolve(channel, FEED_TITLE).ok_or(FeedError::FieldMissing {
        field: "title",
        scope: "RDF channel",
    })?;
    let link = resolve(channel, FEED_LINK).ok_or(FeedError::FieldMissing {
        field: "link",
        scope: "RDF channel",
    })?;
    let description = resolve(channel, FEED_DESCRIPTION).unwrap_or_default();

    // Items enumerated from the root, not the channel
    let mut items = Vec::new();
    let mut dropped_items = 0;
    for node in resolve_all(root, "item") {
        match extract_item(node) {
            Some(item) => items.push(item),
            None if options.fail_on_invalid_items => {
                return Err(FeedError::FieldMissing {
                    field: "rdf:about",
                    scope: "RDF item",
                });
            }
            None => {
                dropped_items += 1;
                warn!("dropping RDF item with neither rdf:about nor link");
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

fn extract_item(node: &Element) -> Option<Item> {
    let id = resolve(node, ITEM_ID)?;

    Some(Item {
        id,
        title: resolve(node, ITEM_TITLE),
        link: resolve(node, ITEM_LINK),
        updated_at: resolve(node, ITEM_DATE).and_then(|raw| parse_date(&raw)),
        author: resolve(node, ITEM_AUTHOR),
        content: resolve(node, ITEM_CONTENT),
    })
}
