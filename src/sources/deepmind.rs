use crate::feed::FeedClient;
use crate::sources::profile;
use crate::sources::single::SingleFeedSource;

pub const FEED_URL: &str = "https://deepmind.com/blog/feed/basic/";
const HOSTS: &[&str] = &["deepmind.com", "deepmind.google"];

pub fn source(client: FeedClient) -> SingleFeedSource {
    SingleFeedSource::new(client, &profile::DEEPMIND, FEED_URL, HOSTS)
}
