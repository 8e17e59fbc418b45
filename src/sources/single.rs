use crate::domain::{FeedResult, SourceKind};
use crate::errors::TechfeedResult;
use crate::feed::FeedClient;
use crate::sources::profile::SourceProfile;
use crate::sources::traits::{host_matches, FeedSource};

/// A blog that publishes exactly one feed.
pub struct SingleFeedSource {
    client: FeedClient,
    profile: &'static SourceProfile,
    feed_url: &'static str,
    hosts: &'static [&'static str],
}

impl SingleFeedSource {
    pub fn new(
        client: FeedClient,
        profile: &'static SourceProfile,
        feed_url: &'static str,
        hosts: &'static [&'static str],
    ) -> Self {
        Self {
            client,
            profile,
            feed_url,
            hosts,
        }
    }

    pub fn feed_url(&self) -> &'static str {
        self.feed_url
    }

    pub fn get_feed(&self) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(self.feed_url)
    }

    pub fn get_feed_by_url(&self, url: &str) -> TechfeedResult<FeedResult> {
        self.client.parse_feed(url, self.profile, None)
    }
}

impl FeedSource for SingleFeedSource {
    fn kind(&self) -> SourceKind {
        self.profile.kind
    }

    fn can_handle(&self, url: &str) -> bool {
        host_matches(url, self.hosts)
    }

    fn parse_feed(&self, url: &str) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(url)
    }

    fn default_feed_urls(&self) -> Vec<String> {
        vec![self.feed_url.to_string()]
    }
}
