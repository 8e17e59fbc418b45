use crate::domain::{FeedResult, SourceKind};
use crate::errors::TechfeedResult;
use crate::feed::FeedClient;
use crate::sources::profile;
use crate::sources::traits::{host_matches, FeedSource};

pub const BASE_URL: &str = "https://qiita.com";

/// Commonly followed Qiita tags
pub const POPULAR_TAGS: &[&str] = &[
    "python",
    "javascript",
    "ruby",
    "go",
    "typescript",
    "rails",
    "react",
    "vue",
    "aws",
    "docker",
    "kubernetes",
    "terraform",
    "git",
    "linux",
    "機械学習",
    "deeplearning",
    "nextjs",
];

pub struct QiitaSource {
    client: FeedClient,
}

impl QiitaSource {
    pub fn new(client: FeedClient) -> Self {
        Self { client }
    }

    /// Popular items, or the feed of a single tag
    pub fn feed_url(tag: Option<&str>) -> String {
        match tag {
            Some(tag) => format!("{}/tags/{}/feed", BASE_URL, tag),
            None => format!("{}/popular-items/feed.atom", BASE_URL),
        }
    }

    pub fn user_feed_url(username: &str) -> String {
        format!("{}/users/{}/feed.atom", BASE_URL, username)
    }

    pub fn organization_feed_url(org_id: &str) -> String {
        format!("{}/organizations/{}/activities.atom", BASE_URL, org_id)
    }

    pub fn advent_calendar_feed_url(year: u16, calendar_id: &str) -> String {
        format!("{}/advent-calendar/{}/feeds/{}.atom", BASE_URL, year, calendar_id)
    }

    pub fn get_feed(&self, tag: Option<&str>) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(&Self::feed_url(tag))
    }

    pub fn get_user_feed(&self, username: &str) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(&Self::user_feed_url(username))
    }

    pub fn get_organization_feed(&self, org_id: &str) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(&Self::organization_feed_url(org_id))
    }

    pub fn get_advent_calendar_feed(&self, year: u16, calendar_id: &str) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(&Self::advent_calendar_feed_url(year, calendar_id))
    }

    pub fn get_feed_by_url(&self, url: &str) -> TechfeedResult<FeedResult> {
        self.client.parse_feed(url, &profile::QIITA, None)
    }
}

impl Default for QiitaSource {
    fn default() -> Self {
        Self::new(FeedClient::default())
    }
}

impl FeedSource for QiitaSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Qiita
    }

    fn can_handle(&self, url: &str) -> bool {
        host_matches(url, &["qiita.com"])
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
    use pretty_assertions::assert_eq;

    const QIITA_ATOM: &[u8] = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xml:lang="ja-JP">
  <title>Qiita - 人気の記事</title>
  <entry>
    <id>tag:qiita.com,2005:PublicArticle/1</id>
    <title>Rustで始めるCLI</title>
    <link rel="alternate" type="text/html" href="https://qiita.com/alice/items/abc"/>
    <updated>2024-02-11T08:30:00+09:00</updated>
    <author><name>alice</name></author>
    <category term="Rust"/>
    <category term="CLI"/>
    <category term="Rust"/>
    <content type="html">&lt;p&gt;&lt;img src="https://qiita-image-store.example/top.png"&gt;本文&lt;/p&gt;</content>
  </entry>
</feed>"#.as_bytes();

    #[test]
    fn test_feed_urls() {
        assert_eq!(QiitaSource::feed_url(None), "https://qiita.com/popular-items/feed.atom");
        assert_eq!(QiitaSource::feed_url(Some("rust")), "https://qiita.com/tags/rust/feed");
        assert_eq!(QiitaSource::user_feed_url("alice"), "https://qiita.com/users/alice/feed.atom");
        assert_eq!(
            QiitaSource::organization_feed_url("acme"),
            "https://qiita.com/organizations/acme/activities.atom"
        );
        assert_eq!(
            QiitaSource::advent_calendar_feed_url(2023, "rust"),
            "https://qiita.com/advent-calendar/2023/feeds/rust.atom"
        );
    }

    #[test]
    fn test_popular_feed_normalized() {
        let url = "https://qiita.com/popular-items/feed.atom";
        let qiita = QiitaSource::new(client_serving(url, QIITA_ATOM));

        let result = qiita.get_feed(None).unwrap();
        let article = &result.articles()[0];

        assert_eq!(result.total_count(), 1);
        assert_eq!(article.url, "https://qiita.com/alice/items/abc");
        // Only <updated> is present
        assert_eq!(article.published_date, "2024年02月10日");
        assert_eq!(article.author.as_deref(), Some("alice"));
        assert_eq!(article.tags, Some(vec!["Rust".to_string(), "CLI".to_string()]));
        // Empty summary falls back to content, which also yields the image
        assert!(article.summary.as_deref().unwrap_or("").contains("本文"));
        assert_eq!(
            article.image_url.as_deref(),
            Some("https://qiita-image-store.example/top.png")
        );
    }

    #[test]
    fn test_advent_calendar_fetches_expected_url() {
        let url = "https://qiita.com/advent-calendar/2023/feeds/rust.atom";
        let qiita = QiitaSource::new(client_serving(url, QIITA_ATOM));

        let result = qiita.get_advent_calendar_feed(2023, "rust").unwrap();
        assert_eq!(result.feed_url(), url);
    }
}
