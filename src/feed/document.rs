use chrono::{DateTime, Utc};
use feed_rs::model;
use feed_rs::parser;

use crate::errors::{TechfeedError, TechfeedResult};

pub(crate) fn is_image_type(media_type: Option<&str>) -> bool {
    media_type.is_some_and(|t| t.trim().to_ascii_lowercase().starts_with("image/"))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryLink {
    pub href: String,
    pub rel: Option<String>,
    pub media_type: Option<String>,
}

impl EntryLink {
    pub fn is_image(&self) -> bool {
        is_image_type(self.media_type.as_deref())
    }

    pub fn is_enclosure(&self) -> bool {
        self.rel
            .as_deref()
            .is_some_and(|rel| rel.eq_ignore_ascii_case("enclosure"))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Thumbnail {
    /// Missing dimensions count as zero
    pub fn area(&self) -> u64 {
        u64::from(self.width.unwrap_or(0)) * u64::from(self.height.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaItem {
    pub url: String,
    pub media_type: Option<String>,
}

impl MediaItem {
    pub fn is_image(&self) -> bool {
        is_image_type(self.media_type.as_deref())
    }
}

/// One feed entry as handed over by the parser, before any source-specific
/// interpretation.
///
/// feed-rs folds RSS `description` into `summary`, `dc:creator` into
/// `authors`, and RSS `<enclosure>` into media items, so those have no
/// dedicated fields here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub authors: Vec<String>,
    pub categories: Vec<String>,
    pub links: Vec<EntryLink>,
    pub thumbnails: Vec<Thumbnail>,
    pub media: Vec<MediaItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedDocument {
    pub title: Option<String>,
    pub entries: Vec<FeedEntry>,
}

impl FeedDocument {
    pub fn parse(bytes: &[u8]) -> TechfeedResult<Self> {
        let feed = parser::parse(bytes).map_err(|e| TechfeedError::FeedParse(e.to_string()))?;
        Ok(Self::from(feed))
    }
}

impl From<model::Feed> for FeedDocument {
    fn from(feed: model::Feed) -> Self {
        Self {
            title: feed.title.map(|t| t.content),
            entries: feed.entries.into_iter().map(FeedEntry::from).collect(),
        }
    }
}

impl From<model::Entry> for FeedEntry {
    fn from(entry: model::Entry) -> Self {
        // Prefer the alternate link, as feed readers do
        let link = entry
            .links
            .iter()
            .find(|l| l.rel.as_deref().map_or(true, |rel| rel == "alternate"))
            .or_else(|| entry.links.first())
            .map(|l| l.href.clone());

        let links = entry
            .links
            .into_iter()
            .map(|l| EntryLink {
                href: l.href,
                rel: l.rel,
                media_type: l.media_type,
            })
            .collect();

        let mut thumbnails = Vec::new();
        let mut media = Vec::new();
        for object in entry.media {
            thumbnails.extend(object.thumbnails.into_iter().map(|t| Thumbnail {
                url: t.image.uri,
                width: t.image.width,
                height: t.image.height,
            }));

            media.extend(object.content.into_iter().filter_map(|c| {
                let url = c.url?.to_string();
                Some(MediaItem {
                    url,
                    media_type: c.content_type.map(|m| m.to_string()),
                })
            }));
        }

        Self {
            title: entry.title.map(|t| t.content),
            link,
            summary: entry.summary.map(|s| s.content),
            content: entry.content.and_then(|c| c.body),
            published: entry.published,
            updated: entry.updated,
            authors: entry
                .authors
                .into_iter()
                .map(|p| p.name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            categories: entry.categories.into_iter().map(|c| c.term).collect(),
            links,
            thumbnails,
            media,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RSS: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>AWS Blog</title>
    <link>https://aws.amazon.com/blogs/aws/</link>
    <description>Announcements</description>
    <item>
      <title>Amazon S3 update</title>
      <link>https://aws.amazon.com/blogs/aws/s3-update/</link>
      <dc:creator>Jeff Barr</dc:creator>
      <category>Amazon S3</category>
      <category>Storage</category>
      <description><![CDATA[<p>New storage class.</p>]]></description>
      <pubDate>Thu, 28 Dec 2023 09:30:00 +0000</pubDate>
      <media:thumbnail url="https://d2908q01vomqb2.cloudfront.net/s3.png" width="1200" height="630"/>
    </item>
  </channel>
</rss>"#;

    const SAMPLE_ATOM: &[u8] = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Qiita - 人気の記事</title>
  <id>https://qiita.com/popular-items/feed</id>
  <updated>2024-01-15T12:00:00Z</updated>
  <entry>
    <title>Rustで始める並行処理</title>
    <link rel="alternate" type="text/html" href="https://qiita.com/ferris/items/abc123"/>
    <id>tag:qiita.com,2005:PublicArticle/1</id>
    <published>2024-01-14T09:00:00+09:00</published>
    <updated>2024-01-15T12:00:00Z</updated>
    <author><name>ferris</name></author>
    <content type="html"><![CDATA[<p>本文 <img src="https://qiita-image-store.example/1.png" alt=""></p>]]></content>
  </entry>
</feed>"#.as_bytes();

    #[test]
    fn test_parse_rss_entry_fields() {
        let doc = FeedDocument::parse(SAMPLE_RSS).unwrap();

        assert_eq!(doc.title.as_deref(), Some("AWS Blog"));
        assert_eq!(doc.entries.len(), 1);

        let entry = &doc.entries[0];
        assert_eq!(entry.title.as_deref(), Some("Amazon S3 update"));
        assert_eq!(
            entry.link.as_deref(),
            Some("https://aws.amazon.com/blogs/aws/s3-update/")
        );
        assert!(entry.summary.as_deref().unwrap().contains("New storage class."));
        assert!(entry.published.is_some());
        assert_eq!(entry.categories, vec!["Amazon S3", "Storage"]);
    }

    #[test]
    fn test_parse_atom_entry_fields() {
        let doc = FeedDocument::parse(SAMPLE_ATOM).unwrap();
        let entry = &doc.entries[0];

        assert_eq!(entry.title.as_deref(), Some("Rustで始める並行処理"));
        assert_eq!(
            entry.link.as_deref(),
            Some("https://qiita.com/ferris/items/abc123")
        );
        assert_eq!(entry.authors, vec!["ferris"]);
        assert!(entry.content.as_deref().unwrap().contains("<img"));
        assert!(entry.published.is_some());
        assert!(entry.updated.is_some());
    }

    #[test]
    fn test_parse_garbage_is_feed_parse_error() {
        let err = FeedDocument::parse(b"this is not xml").unwrap_err();
        assert!(matches!(err, TechfeedError::FeedParse(_)));
    }

    #[test]
    fn test_parse_empty_channel() {
        let doc = FeedDocument::parse(
            br#"<?xml version="1.0"?><rss version="2.0"><channel><title>Empty</title><link>https://example.com</link><description>none</description></channel></rss>"#,
        )
        .unwrap();

        assert_eq!(doc.title.as_deref(), Some("Empty"));
        assert!(doc.entries.is_empty());
    }

    #[test]
    fn test_thumbnail_area() {
        let thumb = Thumbnail {
            url: "https://example.com/a.png".to_string(),
            width: Some(72),
            height: None,
        };
        assert_eq!(thumb.area(), 0);

        let thumb = Thumbnail {
            width: Some(1200),
            height: Some(630),
            ..thumb
        };
        assert_eq!(thumb.area(), 756_000);
    }

    #[test]
    fn test_image_type_detection() {
        assert!(is_image_type(Some("image/png")));
        assert!(is_image_type(Some("IMAGE/JPEG")));
        assert!(!is_image_type(Some("text/html")));
        assert!(!is_image_type(None));
    }
}
