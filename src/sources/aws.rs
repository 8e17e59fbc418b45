use crate::domain::{FeedResult, Language, SourceKind};
use crate::errors::TechfeedResult;
use crate::feed::FeedClient;
use crate::sources::profile;
use crate::sources::traits::{host_matches, FeedSource};

pub const FEED_URL_JA: &str = "https://aws.amazon.com/jp/blogs/news/feed/";
pub const FEED_URL_EN: &str = "https://aws.amazon.com/jp/blogs/aws/feed/";

pub const POPULAR_CATEGORIES: &[&str] = &[
    "Amazon EC2",
    "AWS Lambda",
    "Amazon ECS",
    "Amazon EKS",
    "Amazon S3",
    "Amazon EBS",
    "Amazon EFS",
    "Amazon RDS",
    "Amazon DynamoDB",
    "Amazon Aurora",
    "Amazon Athena",
    "Amazon Redshift",
    "Amazon QuickSight",
    "Amazon SageMaker",
    "Amazon Rekognition",
    "Amazon Bedrock",
    "AWS CloudFormation",
    "AWS CDK",
    "Security",
    "Architecture",
];

/// The official AWS blog, one feed per language.
pub struct AwsSource {
    client: FeedClient,
}

impl AwsSource {
    pub fn new(client: FeedClient) -> Self {
        Self { client }
    }

    pub fn feed_url(lang: Language) -> &'static str {
        match lang {
            Language::Ja => FEED_URL_JA,
            Language::En => FEED_URL_EN,
        }
    }

    /// Guess the feed language from its path; unknown paths are Japanese
    pub fn language_of(url: &str) -> Language {
        if url.contains("/jp/blogs/news/") {
            Language::Ja
        } else if url.contains("/blogs/aws/") {
            Language::En
        } else {
            Language::Ja
        }
    }

    /// `lang` is validated before anything is fetched.
    pub fn get_feed(&self, lang: &str) -> TechfeedResult<FeedResult> {
        let lang: Language = lang.parse()?;
        self.feed_for(lang)
    }

    pub fn feed_for(&self, lang: Language) -> TechfeedResult<FeedResult> {
        self.client.parse_feed(Self::feed_url(lang), &profile::AWS, Some(lang))
    }

    pub fn get_feed_by_url(&self, url: &str) -> TechfeedResult<FeedResult> {
        self.client.parse_feed(url, &profile::AWS, Some(Self::language_of(url)))
    }

    /// Japanese first, then English
    pub fn get_all_feeds(&self) -> TechfeedResult<Vec<(Language, FeedResult)>> {
        [Language::Ja, Language::En]
            .into_iter()
            .map(|lang| Ok((lang, self.feed_for(lang)?)))
            .collect()
    }
}

impl Default for AwsSource {
    fn default() -> Self {
        Self::new(FeedClient::default())
    }
}

impl FeedSource for AwsSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Aws
    }

    fn can_handle(&self, url: &str) -> bool {
        host_matches(url, &["aws.amazon.com"])
    }

    fn parse_feed(&self, url: &str) -> TechfeedResult<FeedResult> {
        self.get_feed_by_url(url)
    }

    fn default_feed_urls(&self) -> Vec<String> {
        vec![FEED_URL_JA.to_string(), FEED_URL_EN.to_string()]
    }
}
