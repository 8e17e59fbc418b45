use crate::feed::FeedClient;
use crate::sources::profile;
use crate::sources::single::SingleFeedSource;

pub const FEED_URL: &str = "https://huggingface.co/blog/feed.xml";
const HOSTS: &[&str] = &["huggingface.co"];

pub fn source(client: FeedClient) -> SingleFeedSource {
    SingleFeedSource::new(client, &profile::HUGGING_FACE, FEED_URL, HOSTS)
}
