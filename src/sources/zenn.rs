use tracing::warn;

use crate::domain::{FeedResult, SourceKind};
use crate::errors::TechfeedResult;
use crate::feed::FeedClient;
use crate::sources::profile;
use crate::sources::traits::{host_matches, FeedSource};

pub const BASE_URL: &str = "https://zenn.dev";

pub struct ZennSource {
    client: FeedClient,
}

impl ZennSource {
    pub fn new(client: FeedClient) -> Self {
        Self { client }
    }

    /// Site-wide feed, or a topic feed. `all_pages` only applies to topics.
    pub fn feed_url(topic: Option<&str>, all_pages: bool) -> String {
        match topic {
            Some(topic) => with_all_pages(format!("{}/topics/{}/feed", BASE_URL, topic), all_pages),
            None => {
                if all_pages {
                    warn!("all_pages is not available for the site-wide feed; specify a topic");
                }
                format!("{}/feed", BASE_URL)
            }
        }
    }

    pub fn user_feed_url(username: &str, all_pages: bool) -> String {
        with_all_pages(format!("{}/p/{}/feed", BASE_URL, username), all_pages)
    }

    pub fn get_feed(&self, topic: Option<&str>, all_pages: bool) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(&Self::feed_url(topic, all_pages))
    }

    pub fn get_user_feed(&self, username: &str, all_pages: bool) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(&Self::user_feed_url(username, all_pages))
    }

    pub fn get_feed_by_url(&self, url: &str) -> TechfeedResult<FeedResult> {
        self.client.parse_feed(url, &profile::ZENN, None)
    }
}

fn with_all_pages(url: String, all_pages: bool) -> String {
    if all_pages {
        format!("{}?all=1", url)
    } else {
        url
    }
}

impl Default for ZennSource {
    fn default() -> Self {
        Self::new(FeedClient::default())
    }
}

impl FeedSource for ZennSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Zenn
    }

    fn can_handle(&self, url: &str) -> bool {
        host_matches(url, &["zenn.dev"])
    }

    fn parse_feed(&self, url: &str) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(url)
    }

    fn default_feed_urls(&self) -> Vec<String> {
        vec![Self::feed_url(None, false)]
    }
}
