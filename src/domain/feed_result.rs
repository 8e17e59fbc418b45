use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

use super::Article;

/// Outcome of one feed fetch. The article count is always derived from
/// `articles`, so there is nothing to keep in sync.
#[derive(Debug, Clone)]
pub struct FeedResult {
    articles: Vec<Article>,
    feed_title: String,
    feed_url: String,
    fetched_at: DateTime<Local>,
}

impl FeedResult {
    pub fn new(
        articles: Vec<Article>,
        feed_title: String,
        feed_url: String,
        fetched_at: DateTime<Local>,
    ) -> Self {
        Self {
            articles,
            feed_title,
            feed_url,
            fetched_at,
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn into_articles(self) -> Vec<Article> {
        self.articles
    }

    /// Keep only the first `max` articles; the count follows.
    pub fn truncate(mut self, max: usize) -> Self {
        self.articles.truncate(max);
        self
    }

    pub fn feed_title(&self) -> &str {
        &self.feed_title
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    pub fn fetched_at(&self) -> DateTime<Local> {
        self.fetched_at
    }

    pub fn total_count(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Number of articles whose date had to fall back to the fetch time
    pub fn fallback_date_count(&self) -> usize {
        self.articles.iter().filter(|a| a.used_fallback_date()).count()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedResultRecord<'a> {
    feed_title: &'a str,
    feed_url: &'a str,
    fetched_at: String,
    total_count: usize,
    articles: &'a [Article],
}

impl Serialize for FeedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FeedResultRecord {
            feed_title: &self.feed_title,
            feed_url: &self.feed_url,
            fetched_at: self.fetched_at.to_rfc3339(),
            total_count: self.total_count(),
            articles: &self.articles,
        }
        .serialize(serializer)
    }
}
