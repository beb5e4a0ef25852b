//! Atom end-to-end extraction

use syndic_rs::parse;

#[test]
fn test_minimal_well_formed_document() {
    let feed = parse(
        r#"<feed xmlns="http://www.w3.org/2005/Atom">
             <title>T</title>
             <link href="https://example.com/"/>
             <entry><id>urn:uuid:1</id><title>I</title></entry>
           </feed>"#,
    )
    .unwrap();

    assert_eq!(feed.title, "T");
    assert_eq!(feed.link, "https://example.com/");
    assert_eq!(feed.items[0].id, "urn:uuid:1");
    assert_eq!(feed.items[0].title.as_deref(), Some("I"));
}

#[test]
fn test_realistic_feed() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example Releases</title>
  <subtitle>Release announcements</subtitle>
  <link rel="self" href="https://example.com/releases.atom"/>
  <link rel="alternate" type="text/html" href="https://example.com/releases"/>
  <updated>2026-02-01T08:00:00Z</updated>
  <entry>
    <id>tag:example.com,2026:release-2</id>
    <title>Release 2</title>
    <link rel="alternate" href="https://example.com/releases/2"/>
    <updated>2026-02-01T08:00:00Z</updated>
    <author><name>Bo Lind</name></author>
    <content type="html">&lt;p&gt;Changelog.&lt;/p&gt;</content>
  </entry>
  <entry>
    <id>tag:example.com,2026:release-1</id>
    <title>Release 1</title>
    <link rel="alternate" href="https://example.com/releases/1"/>
    <published>2026-01-10T08:00:00Z</published>
    <summary>First release.</summary>
  </entry>
</feed>"#;

    let feed = parse(xml).unwrap();
    assert_eq!(feed.title, "Example Releases");
    assert_eq!(feed.description, "Release announcements");
    // rel="self" must lose to rel="alternate" regardless of order
    assert_eq!(feed.link, "https://example.com/releases");

    assert_eq!(feed.items.len(), 2);
    let first = &feed.items[0];
    assert_eq!(first.link.as_deref(), Some("https://example.com/releases/2"));
    assert_eq!(first.author.as_deref(), Some("Bo Lind"));
    assert_eq!(first.content.as_deref(), Some("<p>Changelog.</p>"));
    assert!(first.updated_at.is_some());

    let second = &feed.items[1];
    assert_eq!(second.content.as_deref(), Some("First release."));
    assert!(second.updated_at.is_some()); // from <published>
}

#[test]
fn test_self_link_only_still_resolves() {
    // No link marked alternate: the first one stands in
    let feed = parse(
        r#"<feed><title>T</title>
           <link rel="self" href="https://example.com/feed.xml"/></feed>"#,
    )
    .unwrap();
    assert_eq!(feed.link, "https://example.com/feed.xml");
}

#[test]
fn test_entry_id_has_no_link_fallback() {
    // Atom ids never fall back to the link; the entry is dropped
    let feed = parse(
        r#"<feed><title>T</title><link href="https://example.com/"/>
           <entry><link rel="alternate" href="https://example.com/a"/></entry>
           </feed>"#,
    )
    .unwrap();
    assert!(feed.items.is_empty());
    assert_eq!(feed.dropped_items, 1);
}
