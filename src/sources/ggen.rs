use crate::feed::FeedClient;
use crate::sources::profile;
use crate::sources::single::SingleFeedSource;

pub const FEED_URL: &str = "https://blog.g-gen.co.jp/feed";
const HOSTS: &[&str] = &["blog.g-gen.co.jp"];

pub fn source(client: FeedClient) -> SingleFeedSource {
    SingleFeedSource::new(client, &profile::GGEN, FEED_URL, HOSTS)
}
