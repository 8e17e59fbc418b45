use crate::domain::{FeedResult, SourceKind};
use crate::errors::TechfeedResult;
use crate::feed::FeedClient;
use crate::sources::profile;
use crate::sources::traits::{host_matches, FeedSource};

pub const BASE_URL: &str = "https://dev.classmethod.jp";

pub const POPULAR_TAGS: &[&str] = &[
    "aws",
    "python",
    "serverless",
    "machine-learning",
    "container",
    "devops",
    "security",
    "database",
    "analytics",
    "iot",
];

/// DevelopersIO, ClassMethod's engineering blog
pub struct ClassMethodSource {
    client: FeedClient,
}

impl ClassMethodSource {
    pub fn new(client: FeedClient) -> Self {
        Self { client }
    }

    pub fn feed_url(tag: Option<&str>) -> String {
        match tag {
            Some(tag) => format!("{}/tags/{}/feed/", BASE_URL, tag),
            None => format!("{}/feed/", BASE_URL),
        }
    }

    pub fn author_feed_url(author_id: &str) -> String {
        format!("{}/author/{}/feed/", BASE_URL, author_id)
    }

    pub fn get_feed(&self, tag: Option<&str>) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(&Self::feed_url(tag))
    }

    pub fn get_author_feed(&self, author_id: &str) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(&Self::author_feed_url(author_id))
    }

    pub fn get_feed_by_url(&self, url: &str) -> TechfeedResult<FeedResult> {
        self.client.parse_feed(url, &profile::CLASSMETHOD, None)
    }
}

impl Default for ClassMethodSource {
    fn default() -> Self {
        Self::new(FeedClient::default())
    }
}

impl FeedSource for ClassMethodSource {
    fn kind(&self) -> SourceKind {
        SourceKind::ClassMethod
    }

    fn can_handle(&self, url: &str) -> bool {
        host_matches(url, &["dev.classmethod.jp"])
    }

    fn parse_feed(&self, url: &str) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(url)
    }

    fn default_feed_urls(&self) -> Vec<String> {
        vec![Self::feed_url(None)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::test_support::client_serving;

    const DEVIO_RSS: &[u8] = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>DevelopersIO</title>
    <item>
      <title>Lambda のコールドスタート対策</title>
      <link>https://dev.classmethod.jp/articles/lambda-cold-start/</link>
      <description>概要</description>
      <content:encoded><![CDATA[<p><img src="https://devio2023-media.example/eyecatch.png"></p>]]></content:encoded>
      <dc:creator>suzuki</dc:creator>
      <category>AWS Lambda</category>
      <category>Serverless</category>
      <pubDate>Fri, 12 Apr 2024 00:30:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#.as_bytes();

    #[test]
    fn test_feed_urls() {
        assert_eq!(ClassMethodSource::feed_url(None), "https://dev.classmethod.jp/feed/");
        assert_eq!(
            ClassMethodSource::feed_url(Some("aws")),
            "https://dev.classmethod.jp/tags/aws/feed/"
        );
        assert_eq!(
            ClassMethodSource::author_feed_url("suzuki"),
            "https://dev.classmethod.jp/author/suzuki/feed/"
        );
    }

    #[test]
    fn test_content_image_and_categories() {
        let url = "https://dev.classmethod.jp/tags/aws/feed/";
        let devio = ClassMethodSource::new(client_serving(url, DEVIO_RSS));

        let result = devio.get_feed(Some("aws")).unwrap();
        let article = &result.articles()[0];

        assert_eq!(article.summary.as_deref(), Some("概要"));
        assert_eq!(article.author.as_deref(), Some("suzuki"));
        assert_eq!(
            article.tags,
            Some(vec!["AWS Lambda".to_string(), "Serverless".to_string()])
        );
        assert_eq!(
            article.image_url.as_deref(),
            Some("https://devio2023-media.example/eyecatch.png")
        );
        assert_eq!(article.source, "classmethod");
    }
}
