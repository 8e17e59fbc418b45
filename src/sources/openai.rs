use crate::feed::FeedClient;
use crate::sources::profile;
use crate::sources::single::SingleFeedSource;

pub const FEED_URL: &str = "https://openai.com/blog/rss.xml";
const HOSTS: &[&str] = &["openai.com"];

pub fn source(client: FeedClient) -> SingleFeedSource {
    SingleFeedSource::new(client, &profile::OPENAI, FEED_URL, HOSTS)
}
