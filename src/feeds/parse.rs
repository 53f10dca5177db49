//! RSS and Atom document parsing.
//!
//! Documents are deserialized with `quick-xml`'s serde support. Only the
//! fields the pipeline reads are modelled; everything else is ignored.
//!
//! Supported shapes:
//! - RSS 2.0: `rss/channel/item`
//! - RSS 1.0 (RDF): `rdf:RDF/item`, items beside the channel
//! - Atom: `feed/entry`

use super::FetchError;
use crate::models::RawEntry;
use quick_xml::de::{DeError, Deserializer, EntityResolver};
use quick_xml::escape::resolve_html5_entity;
use quick_xml::events::BytesText;
use serde::Deserialize;
use std::convert::Infallible;

#[derive(Debug, Deserialize)]
struct RssDocument {
    channel: RssChannel,
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    title: Option<String>,
    description: Option<String>,
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    title: Option<AtomText>,
    summary: Option<AtomText>,
}

/// Atom text constructs carry a `type` attribute; only the text is kept.
#[derive(Debug, Deserialize)]
struct AtomText {
    #[serde(rename = "$text", default)]
    value: String,
}

impl From<RssItem> for RawEntry {
    fn from(item: RssItem) -> Self {
        RawEntry {
            title: item.title,
            description: item.description,
            summary: item.summary,
        }
    }
}

impl From<AtomEntry> for RawEntry {
    fn from(entry: AtomEntry) -> Self {
        RawEntry {
            title: entry.title.map(|t| t.value),
            description: None,
            summary: entry.summary.map(|s| s.value),
        }
    }
}

/// Resolves the HTML5 named entities (`&eacute;`, `&nbsp;`, `&euro;`, ...)
/// that news feeds use but XML does not define.
struct Html5Entities;

impl EntityResolver for Html5Entities {
    type Error = Infallible;

    fn capture(&mut self, _doctype: BytesText) -> Result<(), Self::Error> {
        Ok(())
    }

    fn resolve(&self, entity: &str) -> Option<&str> {
        resolve_html5_entity(entity)
    }
}

fn from_feed_str<'de, T: Deserialize<'de>>(xml: &'de str) -> Result<T, DeError> {
    let mut de = Deserializer::from_str_with_resolver(xml, Html5Entities);
    T::deserialize(&mut de)
}

/// Parse a feed document into entries, in document order.
///
/// RSS is tried first, then Atom. A document that is neither yields
/// [`FetchError::Parse`].
pub fn parse_feed(xml: &str) -> Result<Vec<RawEntry>, FetchError> {
    let rss_err = match from_feed_str::<RssDocument>(xml) {
        Ok(doc) => {
            return Ok(doc
                .channel
                .items
                .into_iter()
                .chain(doc.items)
                .map(RawEntry::from)
                .collect());
        }
        Err(e) => e,
    };

    match from_feed_str::<AtomFeed>(xml) {
        Ok(feed) if !feed.entries.is_empty() || xml.contains("<feed") => {
            Ok(feed.entries.into_iter().map(RawEntry::from).collect())
        }
        Ok(_) => Err(FetchError::Parse(format!("not an RSS or Atom document: {rss_err}"))),
        Err(e) => Err(FetchError::Parse(format!(
            "not an RSS or Atom document: {rss_err}; {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Example Feed</title>
    <link>https://example.com</link>
    <description>Feed description</description>
    <item>
      <title>Parliament passes new Amendment Bill</title>
      <link>https://example.com/1</link>
      <description><![CDATA[<p>The Lok Sabha today passed the bill.</p>]]></description>
      <dc:creator>Desk</dc:creator>
    </item>
    <item>
      <title>RBI holds repo rate &amp; signals caution</title>
      <description>Rates&nbsp;unchanged &mdash; for now.</description>
    </item>
    <item>
      <description>No title here</description>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>UN News</title>
  <id>urn:example</id>
  <entry>
    <title type="html">Summit on climate finance opens</title>
    <id>urn:1</id>
    <summary type="html">&lt;b&gt;Leaders&lt;/b&gt; gather.</summary>
  </entry>
  <entry>
    <title>Second entry</title>
    <id>urn:2</id>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_rss_items_in_order() {
        let entries = parse_feed(RSS).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[0].title.as_deref(),
            Some("Parliament passes new Amendment Bill")
        );
        assert_eq!(
            entries[0].description.as_deref(),
            Some("<p>The Lok Sabha today passed the bill.</p>")
        );
        assert_eq!(
            entries[1].title.as_deref(),
            Some("RBI holds repo rate & signals caution")
        );
        assert_eq!(entries[1].body(), "Rates\u{a0}unchanged \u{2014} for now.");
        assert_eq!(entries[2].title, None);
    }

    #[test]
    fn test_html_named_entities_do_not_drop_the_feed() {
        let xml = r#"<rss version="2.0"><channel>
  <item><title>Caf&eacute; policy bill</title><description>Costs &euro;5 &frac12; less</description></item>
  <item><title>Parliament sits</title></item>
</channel></rss>"#;
        let entries = parse_feed(xml).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title.as_deref(), Some("Caf\u{e9} policy bill"));
        assert_eq!(entries[0].body(), "Costs \u{20ac}5 \u{bd} less");
        assert_eq!(entries[1].title.as_deref(), Some("Parliament sits"));
    }

    #[test]
    fn test_parse_atom_entries() {
        let entries = parse_feed(ATOM).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].title.as_deref(),
            Some("Summit on climate finance opens")
        );
        assert_eq!(entries[0].body(), "<b>Leaders</b> gather.");
        assert_eq!(entries[1].summary, None);
        assert_eq!(entries[1].body(), "");
    }

    #[test]
    fn test_parse_rss_without_items() {
        let xml = r#"<rss version="2.0"><channel><title>Empty</title></channel></rss>"#;
        assert!(parse_feed(xml).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rdf_items_beside_channel() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <channel><title>RDF</title></channel>
  <item><title>One</title><description>First</description></item>
  <item><title>Two</title></item>
</rdf:RDF>"#;
        let entries = parse_feed(xml).unwrap();
        let titles: Vec<_> = entries.iter().filter_map(|e| e.title.as_deref()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn test_parse_garbage_is_an_error() {
        assert!(matches!(
            parse_feed("<html><body>Not a feed</body></html>"),
            Err(FetchError::Parse(_))
        ));
        assert!(matches!(parse_feed("not xml at all <"), Err(FetchError::Parse(_))));
    }
}
