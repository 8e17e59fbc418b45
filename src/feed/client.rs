use std::sync::Arc;

use chrono::Local;
use tracing::info;

use crate::config::Config;
use crate::domain::{FeedResult, Language};
use crate::errors::TechfeedResult;
use crate::feed::document::FeedDocument;
use crate::feed::fetcher::{FeedFetcher, HttpFetcher};
use crate::feed::normalize::normalize;
use crate::sources::profile::SourceProfile;

/// Fetch + parse + normalize. Shared by every source adapter.
#[derive(Clone)]
pub struct FeedClient {
    fetcher: Arc<dyn FeedFetcher>,
}

impl FeedClient {
    pub fn new(fetcher: Arc<dyn FeedFetcher>) -> Self {
        Self { fetcher }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(HttpFetcher::new(config)))
    }

    pub fn parse_feed(
        &self,
        url: &str,
        profile: &SourceProfile,
        lang: Option<Language>,
    ) -> TechfeedResult<FeedResult> {
        let bytes = self.fetcher.fetch(url)?;
        let document = FeedDocument::parse(&bytes)?;
        let result = normalize(&document, profile, lang, url, Local::now());

        info!(
            source = %profile.kind,
            url,
            articles = result.total_count(),
            fallback_dates = result.fallback_date_count(),
            "feed normalized"
        );

        Ok(result)
    }

    /// Raw page text, for sources without a feed
    pub fn fetch_text(&self, url: &str) -> TechfeedResult<String> {
        let bytes = self.fetcher.fetch(url)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new(Arc::new(HttpFetcher::default()))
    }
}
