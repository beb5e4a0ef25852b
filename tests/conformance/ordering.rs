//! Item ordering: result sequence mirrors document order in every dialect

use syndic_rs::parse;

fn ids(feed: &syndic_rs::Feed) -> Vec<&str> {
    feed.items.iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn test_rss_document_order() {
    let feed = parse(
        "<rss><channel><title>T</title><link>L</link>\
         <item><guid>3</guid></item>\
         <item><guid>1</guid></item>\
         <item><guid>2</guid></item></channel></rss>",
    )
    .unwrap();
    assert_eq!(ids(&feed), vec!["3", "1", "2"]);
}

#[test]
fn test_atom_document_order() {
    let feed = parse(
        r#"<feed><title>T</title><link href="https://example.com/"/>
           <entry><id>c</id></entry>
           <entry><id>a</id></entry>
           <entry><id>b</id></entry></feed>"#,
    )
    .unwrap();
    assert_eq!(ids(&feed), vec!["c", "a", "b"]);
}

#[test]
fn test_rdf_sibling_items_document_order() {
    // RDF items are siblings of the channel; order must still be preserved,
    // including items appearing before the channel node
    let feed = parse(
        r#"<rdf:RDF>
             <item rdf:about="first"/>
             <channel><title>T</title><link>L</link></channel>
             <item rdf:about="second"/>
             <item rdf:about="third"/>
           </rdf:RDF>"#,
    )
    .unwrap();
    assert_eq!(ids(&feed), vec!["first", "second", "third"]);
}

#[test]
fn test_order_preserved_around_dropped_items() {
    let feed = parse(
        "<rss><channel><title>T</title><link>L</link>\
         <item><guid>1</guid></item>\
         <item><title>dropped</title></item>\
         <item><guid>2</guid></item></channel></rss>",
    )
    .unwrap();
    assert_eq!(ids(&feed), vec!["1", "2"]);
    assert_eq!(feed.dropped_items, 1);
}
