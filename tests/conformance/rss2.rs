//! RSS 2.0 end-to-end extraction

use syndic_rs::parse;

#[test]
fn test_minimal_well_formed_document() {
    let feed = parse(
        "<rss><channel><title>T</title><link>L</link>\
         <item><guid>1</guid><title>I</title></item></channel></rss>",
    )
    .unwrap();

    assert_eq!(feed.title, "T");
    assert_eq!(feed.link, "L");
    assert_eq!(feed.items.len(), 1);
    assert_eq!(feed.items[0].id, "1");
    assert_eq!(feed.items[0].title.as_deref(), Some("I"));
}

#[test]
fn test_realistic_feed() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/"
     xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Example Blog</title>
    <link>https://blog.example.com/</link>
    <description>Notes on things</description>
    <item>
      <title>Release 1.0</title>
      <link>https://blog.example.com/release-1.0</link>
      <guid isPermaLink="false">tag:blog.example.com,2026:release-1.0</guid>
      <pubDate>Tue, 20 Jan 2026 09:15:00 +0000</pubDate>
      <dc:creator>Ana Novak</dc:creator>
      <description>Short summary.</description>
      <content:encoded><![CDATA[<p>Full <b>post</b> body.</p>]]></content:encoded>
    </item>
  </channel>
</rss>"#;

    let feed = parse(xml).unwrap();
    assert_eq!(feed.title, "Example Blog");
    assert_eq!(feed.link, "https://blog.example.com/");
    assert_eq!(feed.description, "Notes on things");

    let item = &feed.items[0];
    assert_eq!(item.id, "tag:blog.example.com,2026:release-1.0");
    assert_eq!(item.link.as_deref(), Some("https://blog.example.com/release-1.0"));
    assert_eq!(item.author.as_deref(), Some("Ana Novak"));
    assert_eq!(item.content.as_deref(), Some("<p>Full <b>post</b> body.</p>"));
    assert!(item.updated_at.is_some());
}

#[test]
fn test_title_and_link_trimmed() {
    let feed = parse(
        "<rss><channel><title>\n  Padded  \n</title><link>  L </link></channel></rss>",
    )
    .unwrap();
    assert_eq!(feed.title, "Padded");
    assert_eq!(feed.link, "L");
}

#[test]
fn test_guid_fallback_to_link() {
    let feed = parse(
        "<rss><channel><title>T</title><link>L</link>\
         <item><link>https://example.com/a</link><title>A</title></item>\
         </channel></rss>",
    )
    .unwrap();
    assert_eq!(feed.items[0].id, "https://example.com/a");
    assert_eq!(feed.items[0].link.as_deref(), Some("https://example.com/a"));
}

#[test]
fn test_empty_description_defaults_to_empty_string() {
    let feed = parse("<rss><channel><title>T</title><link>L</link></channel></rss>").unwrap();
    assert_eq!(feed.description, "");
}

#[test]
fn test_html_entities_in_fields() {
    let feed = parse(
        "<rss><channel><title>Q &amp; A</title><link>L</link>\
         <item><guid>1</guid><title>&lt;1&gt;</title></item></channel></rss>",
    )
    .unwrap();
    assert_eq!(feed.title, "Q & A");
    assert_eq!(feed.items[0].title.as_deref(), Some("<1>"));
}
