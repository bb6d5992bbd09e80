pub mod date;
pub mod text;

use chrono::{DateTime, Utc};
use feed_rs::parser::{self, ParseFeedError};

use crate::app::{NowpageError, Result};

/// The raw fields the feed sources read from one `<item>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
    /// Undecoded description markup.
    pub description: Option<String>,
}

/// Parse an RSS/Atom body into entries, in feed order.
///
/// A body without a feed root or `channel` (or a feed with no items) is an
/// empty list, not an error. Only a body that breaks off or is unreadable
/// inside a recognised feed is a [`NowpageError::FeedParse`].
pub fn parse_feed(body: &[u8]) -> Result<Vec<FeedEntry>> {
    let feed = match parser::parse(body) {
        Ok(feed) => feed,
        Err(ParseFeedError::ParseError(kind)) => {
            tracing::debug!(reason = %kind, "No feed items found in body");
            return Ok(Vec::new());
        }
        Err(e) => return Err(NowpageError::FeedParse(e.to_string())),
    };

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| FeedEntry {
            title: entry.title.map(|t| t.content),
            link: entry.links.into_iter().next().map(|l| l.href),
            published: entry.published,
            description: entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body)),
        })
        .collect();

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Feed</title>
    <description>A test feed</description>
    <item>
      <title>Test Item 1</title>
      <link>https://example.com/item1</link>
      <pubDate>Mon, 01 Jan 2024 00:00:00 GMT</pubDate>
      <description><![CDATA[author: Jane Doe<br/>]]></description>
    </item>
    <item>
      <title>Fish &amp;amp; Chips</title>
      <link>https://example.com/item2</link>
    </item>
  </channel>
</rss>"#;

    const EMPTY_CHANNEL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Nothing here</title>
  </channel>
</rss>"#;

    const TRUNCATED: &str = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <item>
      <title>Dune</title>"#;

    #[test]
    fn test_parse_rss() {
        let entries = parse_feed(RSS_SAMPLE.as_bytes()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title.as_deref(), Some("Test Item 1"));
        assert_eq!(entries[0].link.as_deref(), Some("https://example.com/item1"));
        assert_eq!(
            entries[0].published.map(|d| date::long_date(&d)),
            Some("Jan 1, 2024".to_string())
        );
        assert!(entries[0]
            .description
            .as_deref()
            .is_some_and(|d| d.contains("author: Jane Doe")));
        assert_eq!(entries[1].published, None);
    }

    #[test]
    fn test_titles_are_decoded_once() {
        let entries = parse_feed(RSS_SAMPLE.as_bytes()).unwrap();
        assert_eq!(entries[1].title.as_deref(), Some("Fish &amp; Chips"));
    }

    #[test]
    fn test_empty_channel_is_empty() {
        let entries = parse_feed(EMPTY_CHANNEL.as_bytes()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_missing_channel_is_empty() {
        let entries = parse_feed(br#"<?xml version="1.0"?><rss version="2.0"></rss>"#).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_non_feed_bodies_are_empty() {
        assert!(parse_feed(b"<html><body>hi</body></html>").unwrap().is_empty());
        assert!(parse_feed(b"this is not xml").unwrap().is_empty());
    }

    #[test]
    fn test_truncated_feed_is_feed_parse_error() {
        let err = parse_feed(TRUNCATED.as_bytes()).unwrap_err();
        assert!(matches!(err, NowpageError::FeedParse(_)));
    }
}
