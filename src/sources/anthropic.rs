use std::collections::HashSet;
use std::sync::LazyLock;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate};
use scraper::{Html, Selector};
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{Article, DateOrigin, FeedResult, SourceKind};
use crate::errors::{TechfeedError, TechfeedResult};
use crate::feed::extract::format_japanese_date;
use crate::feed::FeedClient;
use crate::sources::traits::{host_matches, parse_url, FeedSource};

pub const BASE_URL: &str = "https://www.anthropic.com";
pub const NEWS_URL: &str = "https://www.anthropic.com/news";
pub const FEED_TITLE: &str = "Anthropic News";

/// Cap used when the news page is fetched as part of a larger run
pub const DEFAULT_MAX_ARTICLES: usize = 20;

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid link selector"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1.h2").expect("valid title selector"));
static TIMESTAMP_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[class*=post-timestamp]").expect("valid timestamp selector"));

const DATE_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%Y年%m月%d日"];

/// Title and date read from a single news page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetails {
    pub url: String,
    pub title: String,
    pub date: Option<NaiveDate>,
}

impl ArticleDetails {
    pub fn into_article(self, fetched_at: DateTime<Local>) -> Article {
        let (published_date, origin) = match self.date {
            Some(date) => (format_japanese_date(&date), DateOrigin::Published),
            None => (format_japanese_date(&fetched_at), DateOrigin::FetchTime),
        };

        Article::new(
            self.title,
            self.url,
            published_date,
            SourceKind::AnthropicNews.source_id(None),
        )
        .with_date_origin(origin)
    }
}

/// Anthropic has no feed; its news index is scraped instead.
pub struct AnthropicNewsSource {
    client: FeedClient,
    delay: Duration,
    max_articles: Option<usize>,
}

impl AnthropicNewsSource {
    pub fn new(client: FeedClient, delay: Duration) -> Self {
        Self {
            client,
            delay,
            max_articles: None,
        }
    }

    /// Limit applied when fetched through [`FeedSource`]
    pub fn with_max_articles(mut self, max_articles: Option<usize>) -> Self {
        self.max_articles = max_articles;
        self
    }

    pub fn news_urls(&self) -> TechfeedResult<Vec<String>> {
        self.news_urls_from(NEWS_URL)
    }

    /// An index without any news links means the page layout changed.
    fn news_urls_from(&self, index_url: &str) -> TechfeedResult<Vec<String>> {
        let html = self.client.fetch_text(index_url)?;
        let urls = extract_news_urls(&html);
        if urls.is_empty() {
            return Err(TechfeedError::Scrape(format!("no news links found on {}", index_url)));
        }
        Ok(urls)
    }

    pub fn article_details(&self, url: &str) -> TechfeedResult<ArticleDetails> {
        let html = self.client.fetch_text(url)?;
        Ok(extract_article_details(url, &html))
    }

    pub fn get_feed(&self, max_articles: Option<usize>) -> TechfeedResult<FeedResult> {
        self.scrape(NEWS_URL, max_articles)
    }

    fn scrape(&self, index_url: &str, max_articles: Option<usize>) -> TechfeedResult<FeedResult> {
        let fetched_at = Local::now();
        let mut urls = self.news_urls_from(index_url)?;
        if let Some(max) = max_articles {
            urls.truncate(max);
        }

        info!(count = urls.len(), "fetching anthropic news pages");

        let mut articles = Vec::with_capacity(urls.len());
        for (i, url) in urls.iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }

            match self.article_details(url) {
                Ok(details) => articles.push(details.into_article(fetched_at)),
                Err(e) => warn!(url = %url, error = %e, "skipping news page"),
            }
        }

        Ok(FeedResult::new(
            articles,
            FEED_TITLE.to_string(),
            index_url.to_string(),
            fetched_at,
        ))
    }
}

impl Default for AnthropicNewsSource {
    fn default() -> Self {
        Self::new(FeedClient::default(), Config::default().scrape_delay)
    }
}

impl FeedSource for AnthropicNewsSource {
    fn kind(&self) -> SourceKind {
        SourceKind::AnthropicNews
    }

    fn can_handle(&self, url: &str) -> bool {
        host_matches(url, &["anthropic.com"])
    }

    /// Only the news index can be listed; single article pages are rejected.
    fn parse_feed(&self, url: &str) -> TechfeedResult<FeedResult> {
        let parsed = parse_url(url)?;
        if parsed.path().trim_end_matches('/') != "/news" {
            return Err(TechfeedError::UnsupportedSource(url.to_string()));
        }
        self.scrape(NEWS_URL, self.max_articles)
    }

    fn default_feed_urls(&self) -> Vec<String> {
        vec![NEWS_URL.to_string()]
    }
}

/// Absolute `/news/` links in page order, without duplicates or the index itself.
pub fn extract_news_urls(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let base = match url::Url::parse(BASE_URL) {
        Ok(base) => base,
        Err(_) => return Vec::new(),
    };

    let mut seen = HashSet::new();
    document
        .select(&LINK_SELECTOR)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.contains("/news/"))
        .filter_map(|href| base.join(href).ok())
        .map(|url| url.to_string())
        .filter(|url| !url.ends_with("/news"))
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

pub fn extract_article_details(url: &str, html: &str) -> ArticleDetails {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| collapse_text(el.text()))
        .unwrap_or_default();

    let date = document
        .select(&TIMESTAMP_SELECTOR)
        .next()
        .map(|el| collapse_text(el.text()))
        .and_then(|text| parse_news_date(&text));

    ArticleDetails {
        url: url.to_string(),
        title,
        date,
    }
}

/// The timestamp block reads like `Mar 4, 2024●5 min read`; only the date part is kept.
pub fn parse_news_date(text: &str) -> Option<NaiveDate> {
    let date_part = text.split(['●', '•']).next().unwrap_or("").trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

fn collapse_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::fetcher::MockFeedFetcher;
    use std::sync::Arc;

    const INDEX_HTML: &str = r#"<html><body>
      <a href="/news">News</a>
      <a href="/news/claude-3-family">Claude 3</a>
      <a href="https://www.anthropic.com/news/core-views">Core views</a>
      <a href="/news/claude-3-family">Claude 3 again</a>
      <a href="/research">Research</a>
    </body></html>"#;

    const ARTICLE_HTML: &str = r#"<html><body>
      <h1 class="h2">Introducing the next generation of Claude</h1>
      <div class="PostDetail_post-timestamp__TBJ0Z text-label">Mar 4, 2024●Announcements</div>
    </body></html>"#;

    #[test]
    fn test_extract_news_urls_dedups_in_order() {
        let urls = extract_news_urls(INDEX_HTML);

        assert_eq!(
            urls,
            vec![
                "https://www.anthropic.com/news/claude-3-family".to_string(),
                "https://www.anthropic.com/news/core-views".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_article_details() {
        let details = extract_article_details("https://www.anthropic.com/news/x", ARTICLE_HTML);

        assert_eq!(details.title, "Introducing the next generation of Claude");
        assert_eq!(details.date, NaiveDate::from_ymd_opt(2024, 3, 4));
    }

    #[test]
    fn test_parse_news_date_formats() {
        assert_eq!(parse_news_date("Mar 4, 2024"), NaiveDate::from_ymd_opt(2024, 3, 4));
        assert_eq!(
            parse_news_date("September 12, 2023 • Policy"),
            NaiveDate::from_ymd_opt(2023, 9, 12)
        );
        assert_eq!(parse_news_date("2024年01月15日"), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(parse_news_date("sometime"), None);
    }

    #[test]
    fn test_missing_date_uses_fetch_time() {
        let details = extract_article_details("https://www.anthropic.com/news/x", "<h1 class=\"h2\">T</h1>");
        let article = details.into_article(Local::now());

        assert_eq!(article.date_origin, DateOrigin::FetchTime);
        assert_eq!(article.source, "anthropic");
    }

    #[test]
    fn test_get_feed_skips_failed_pages() {
        let mut fetcher = MockFeedFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| url == NEWS_URL)
            .times(1)
            .returning(|_| Ok(INDEX_HTML.as_bytes().to_vec()));
        fetcher
            .expect_fetch()
            .withf(|url| url.ends_with("/claude-3-family"))
            .times(1)
            .returning(|url| {
                Err(TechfeedError::HttpStatus {
                    url: url.to_string(),
                    status: 500,
                })
            });
        fetcher
            .expect_fetch()
            .withf(|url| url.ends_with("/core-views"))
            .times(1)
            .returning(|_| Ok(ARTICLE_HTML.as_bytes().to_vec()));

        let source = AnthropicNewsSource::new(FeedClient::new(Arc::new(fetcher)), Duration::ZERO);
        let result = source.get_feed(None).unwrap();

        assert_eq!(result.feed_title(), "Anthropic News");
        assert_eq!(result.total_count(), 1);
        assert_eq!(
            result.articles()[0].url,
            "https://www.anthropic.com/news/core-views"
        );
        assert_eq!(result.articles()[0].published_date, "2024年03月04日");
    }

    #[test]
    fn test_index_without_links_is_a_scrape_error() {
        let mut fetcher = MockFeedFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(b"<html><body>maintenance</body></html>".to_vec()));

        let source = AnthropicNewsSource::new(FeedClient::new(Arc::new(fetcher)), Duration::ZERO);

        assert!(matches!(source.get_feed(None), Err(TechfeedError::Scrape(_))));
    }

    #[test]
    fn test_article_page_is_not_a_feed() {
        let mut fetcher = MockFeedFetcher::new();
        fetcher.expect_fetch().never();

        let source = AnthropicNewsSource::new(FeedClient::new(Arc::new(fetcher)), Duration::ZERO);

        assert!(source.can_handle("https://www.anthropic.com/news/claude-3-family"));
        assert!(matches!(
            source.parse_feed("https://www.anthropic.com/news/claude-3-family"),
            Err(TechfeedError::UnsupportedSource(_))
        ));
    }

    #[test]
    fn test_index_with_trailing_slash_is_scraped() {
        let mut fetcher = MockFeedFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| url == NEWS_URL)
            .times(1)
            .returning(|_| Ok(INDEX_HTML.as_bytes().to_vec()));
        fetcher
            .expect_fetch()
            .withf(|url| url.ends_with("/claude-3-family"))
            .times(1)
            .returning(|_| Ok(ARTICLE_HTML.as_bytes().to_vec()));

        let source = AnthropicNewsSource::new(FeedClient::new(Arc::new(fetcher)), Duration::ZERO)
            .with_max_articles(Some(1));
        let result = source.parse_feed("https://www.anthropic.com/news/").unwrap();

        assert_eq!(result.feed_url(), NEWS_URL);
        assert_eq!(result.total_count(), 1);
    }

    #[test]
    fn test_max_articles_limits_detail_requests() {
        let mut fetcher = MockFeedFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| url == NEWS_URL)
            .times(1)
            .returning(|_| Ok(INDEX_HTML.as_bytes().to_vec()));
        fetcher
            .expect_fetch()
            .withf(|url| url.ends_with("/claude-3-family"))
            .times(1)
            .returning(|_| Ok(ARTICLE_HTML.as_bytes().to_vec()));

        let source = AnthropicNewsSource::new(FeedClient::new(Arc::new(fetcher)), Duration::ZERO);
        let result = source.get_feed(Some(1)).unwrap();

        assert_eq!(result.total_count(), 1);
    }
}
