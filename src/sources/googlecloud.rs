use crate::domain::{FeedResult, Language, SourceKind};
use crate::errors::TechfeedResult;
use crate::feed::FeedClient;
use crate::sources::profile;
use crate::sources::traits::{host_matches, FeedSource};

pub const FEED_URL_EN: &str = "https://cloudblog.withgoogle.com/rss/";
pub const FEED_URL_JA: &str = "https://cloudblog.withgoogle.com/ja/rss/";

pub const POPULAR_TOPICS: &[&str] = &[
    "AI & Machine Learning",
    "Compute",
    "Containers & Kubernetes",
    "Data Analytics",
    "Databases",
    "Developers & Practitioners",
    "Infrastructure",
    "Management Tools",
    "Networking",
    "Security",
    "Serverless",
    "Storage & Data Transfer",
];

pub struct GoogleCloudSource {
    client: FeedClient,
}

impl GoogleCloudSource {
    pub fn new(client: FeedClient) -> Self {
        Self { client }
    }

    pub fn feed_url(lang: Language) -> &'static str {
        match lang {
            Language::Ja => FEED_URL_JA,
            Language::En => FEED_URL_EN,
        }
    }

    pub fn language_of(url: &str) -> Language {
        if url.contains("/ja/") {
            Language::Ja
        } else {
            Language::En
        }
    }

    pub fn get_feed(&self, lang: &str) -> TechfeedResult<FeedResult> {
        let lang: Language = lang.parse()?;
        self.feed_for(lang)
    }

    pub fn feed_for(&self, lang: Language) -> TechfeedResult<FeedResult> {
        self.client
            .parse_feed(Self::feed_url(lang), &profile::GOOGLE_CLOUD, Some(lang))
    }

    pub fn get_feed_by_url(&self, url: &str) -> TechfeedResult<FeedResult> {
        self.client
            .parse_feed(url, &profile::GOOGLE_CLOUD, Some(Self::language_of(url)))
    }

    pub fn get_all_feeds(&self) -> TechfeedResult<Vec<(Language, FeedResult)>> {
        [Language::Ja, Language::En]
            .into_iter()
            .map(|lang| Ok((lang, self.feed_for(lang)?)))
            .collect()
    }
}

impl Default for GoogleCloudSource {
    fn default() -> Self {
        Self::new(FeedClient::default())
    }
}

impl FeedSource for GoogleCloudSource {
    fn kind(&self) -> SourceKind {
        SourceKind::GoogleCloud
    }

    fn can_handle(&self, url: &str) -> bool {
        host_matches(url, &["cloudblog.withgoogle.com"])
    }

    fn parse_feed(&self, url: &str) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(url)
    }

    fn default_feed_urls(&self) -> Vec<String> {
        vec![FEED_URL_JA.to_string(), FEED_URL_EN.to_string()]
    }
}
