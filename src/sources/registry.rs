use crate::config::Config;
use crate::domain::{FeedResult, SourceKind};
use crate::errors::{TechfeedError, TechfeedResult};
use crate::feed::FeedClient;
use crate::sources::anthropic::{AnthropicNewsSource, DEFAULT_MAX_ARTICLES};
use crate::sources::traits::FeedSource;
use crate::sources::{
    aws::AwsSource, classmethod::ClassMethodSource, deepmind, ggen, googleai,
    googlecloud::GoogleCloudSource, huggingface, openai, qiita::QiitaSource, zenn::ZennSource,
};

pub struct SourceRegistry {
    sources: Vec<Box<dyn FeedSource>>,
}

impl SourceRegistry {
    /// Every source in catalog order. Hosts never overlap, so order only affects listing.
    pub fn new(client: FeedClient, config: &Config) -> Self {
        let mut registry = Self {
            sources: Vec::new(),
        };

        registry.register(Box::new(ZennSource::new(client.clone())));
        registry.register(Box::new(QiitaSource::new(client.clone())));
        registry.register(Box::new(ClassMethodSource::new(client.clone())));
        registry.register(Box::new(AwsSource::new(client.clone())));
        registry.register(Box::new(GoogleCloudSource::new(client.clone())));
        registry.register(Box::new(huggingface::source(client.clone())));
        registry.register(Box::new(openai::source(client.clone())));
        registry.register(Box::new(deepmind::source(client.clone())));
        registry.register(Box::new(ggen::source(client.clone())));
        registry.register(Box::new(googleai::source(client.clone())));
        registry.register(Box::new(
            AnthropicNewsSource::new(client, config.scrape_delay)
                .with_max_articles(Some(DEFAULT_MAX_ARTICLES)),
        ));

        registry
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(FeedClient::from_config(config), config)
    }

    pub fn register(&mut self, source: Box<dyn FeedSource>) {
        self.sources.push(source);
    }

    pub fn sources(&self) -> impl Iterator<Item = &dyn FeedSource> {
        self.sources.iter().map(|s| s.as_ref())
    }

    /// Find appropriate source for URL
    pub fn find_source(&self, url: &str) -> Option<&dyn FeedSource> {
        self.sources
            .iter()
            .find(|s| s.can_handle(url))
            .map(|s| s.as_ref())
    }

    pub fn get(&self, kind: SourceKind) -> Option<&dyn FeedSource> {
        self.sources
            .iter()
            .find(|s| s.kind() == kind)
            .map(|s| s.as_ref())
    }

    /// Parse a feed URL with whichever source owns its host
    pub fn parse_feed(&self, url: &str) -> TechfeedResult<FeedResult> {
        let source = self
            .find_source(url)
            .ok_or_else(|| TechfeedError::UnsupportedSource(url.to_string()))?;

        source.parse_feed(url)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::test_support::{client_serving, offline_client, SAMPLE_RSS};

    fn offline_registry() -> SourceRegistry {
        SourceRegistry::new(offline_client(), &Config::default())
    }

    #[test]
    fn test_detects_each_source_by_host() {
        let registry = offline_registry();

        let cases = [
            ("https://zenn.dev/topics/rust/feed", SourceKind::Zenn),
            ("https://qiita.com/tags/rust/feed", SourceKind::Qiita),
            ("https://dev.classmethod.jp/feed/", SourceKind::ClassMethod),
            ("https://aws.amazon.com/jp/blogs/news/feed/", SourceKind::Aws),
            ("https://cloudblog.withgoogle.com/ja/rss/", SourceKind::GoogleCloud),
            ("https://huggingface.co/blog/feed.xml", SourceKind::HuggingFace),
            ("https://openai.com/blog/rss.xml", SourceKind::OpenAi),
            ("https://deepmind.google/blog/rss.xml", SourceKind::DeepMind),
            ("https://blog.g-gen.co.jp/feed", SourceKind::GGen),
            ("https://feeds.feedburner.com/blogspot/gJZg", SourceKind::GoogleAi),
            ("https://www.anthropic.com/news", SourceKind::AnthropicNews),
        ];

        for (url, expected) in cases {
            let source = registry.find_source(url).unwrap();
            assert_eq!(
                source.kind(),
                expected,
                "URL {} should be detected as {:?}, not {:?}",
                url,
                expected,
                source.kind()
            );
        }
    }

    #[test]
    fn test_unknown_host_is_unsupported() {
        let registry = offline_registry();

        assert!(registry.find_source("https://example.com/feed.xml").is_none());
        let err = registry.parse_feed("https://example.com/feed.xml").unwrap_err();
        assert!(matches!(err, TechfeedError::UnsupportedSource(_)));
    }

    #[test]
    fn test_registry_follows_catalog_order() {
        let registry = offline_registry();
        let kinds: Vec<SourceKind> = registry.sources().map(|s| s.kind()).collect();

        assert_eq!(kinds, SourceKind::ALL.to_vec());
    }

    #[test]
    fn test_parse_feed_dispatches() {
        let url = "https://huggingface.co/blog/feed.xml";
        let registry = SourceRegistry::new(client_serving(url, SAMPLE_RSS), &Config::default());

        let result = registry.parse_feed(url).unwrap();
        assert_eq!(result.articles()[0].source, "huggingface");
    }
}
