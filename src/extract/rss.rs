//! RSS 2.0 extraction
//!
//! Feed-level fields live on `rss > channel`; items are nested inside the
//! channel. Reference: https://www.rssboard.org/rss-specification

use tracing::warn;

use crate::model::{Feed, Item};
use crate::parser::ParseOptions;
use crate::resolve::{parse_date, resolve, resolve_all, Lookup};
use crate::xml::Element;
use crate::{FeedError, Result};

const FEED_TITLE: &[Lookup] = &[Lookup::ChildText("title")];
const FEED_LINK: &[Lookup] = &[Lookup::ChildText("link")];
const FEED_DESCRIPTION: &[Lookup] = &[Lookup::ChildText("description")];

// guid is the canonical id; the item link stands in when it is missing
const ITEM_ID: &[Lookup] = &[Lookup::ChildText("guid"), Lookup::ChildText("link")];
const ITEM_TITLE: &[Lookup] = &[Lookup::ChildText("title")];
const ITEM_LINK: &[Lookup] = &[Lookup::ChildText("link")];
const ITEM_DATE: &[Lookup] = &[Lookup::ChildText("pubDate"), Lookup::ChildText("dc:date")];
const ITEM_AUTHOR: &[Lookup] = &[Lookup::ChildText("author"), Lookup::ChildText("dc:creator")];
const ITEM_CONTENT: &[Lookup] = &[
    Lookup::ChildText("content:encoded"),
    Lookup::ChildText("description"),
];

pub(super) fn extract(root: &Element, options: &ParseOptions) -> Result<Feed> {
    let channel = root.child("channel").ok_or(FeedError::FieldMissing {
        field: "channel",
        scope: "RSS document",
    })?;

    let title = resolve(channel, FEED_TITLE).ok_or(FeedError::FieldMissing {
        field: "title",
        scope: "RSS channel",
    })?;
    let link = resolve(channel, FEED_LINK).ok_or(FeedError::FieldMissing {
        field: "link",
        scope: "RSS channel",
    })?;
    let description = resolve(channel, FEED_DESCRIPTION).unwrap_or_default();

    let mut items = Vec::new();
    let mut dropped_items = 0;
    for node in resolve_all(channel, "item") {
        match extract_item(node) {
            Some(item) => items.push(item),
            None if options.fail_on_invalid_items => {
                return Err(FeedError::FieldMissing {
                    field: "guid",
                    scope: "RSS item",
                });
            }
            None => {
                dropped_items += 1;
                warn!("dropping RSS item with neither guid nor link");
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
