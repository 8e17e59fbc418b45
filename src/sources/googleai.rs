use crate::feed::FeedClient;
use crate::sources::profile;
use crate::sources::single::SingleFeedSource;

/// Feedburner mirror of the Google Research blog
pub const FEED_URL: &str = "https://feeds.feedburner.com/blogspot/gJZg";
const HOSTS: &[&str] = &["feeds.feedburner.com", "blog.research.google"];

pub fn source(client: FeedClient) -> SingleFeedSource {
    SingleFeedSource::new(client, &profile::GOOGLE_AI, FEED_URL, HOSTS)
}
