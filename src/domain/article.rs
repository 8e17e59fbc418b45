use serde::{Serialize, Serializer};

/// Summaries longer than this many characters are shortened for display.
pub const SHORT_SUMMARY_CHARS: usize = 150;

/// Where an article's `published_date` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrigin {
    #[default]
    Published,
    Updated,
    /// No usable timestamp in the entry; the fetch time was substituted.
    FetchTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub published_date: String,
    pub source: String,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub date_origin: DateOrigin,
}

impl Article {
    pub fn new(title: String, url: String, published_date: String, source: String) -> Self {
        Self {
            title,
            url,
            published_date,
            source,
            summary: None,
            author: None,
            tags: None,
            image_url: None,
            date_origin: DateOrigin::default(),
        }
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn with_tags(mut self, tags: Option<Vec<String>>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    pub fn with_date_origin(mut self, date_origin: DateOrigin) -> Self {
        self.date_origin = date_origin;
        self
    }

    /// Summary cut to 150 characters with a trailing "..." when longer
    pub fn short_summary(&self) -> String {
        let Some(summary) = self.summary.as_deref() else {
            return String::new();
        };

        if summary.chars().count() > SHORT_SUMMARY_CHARS {
            let mut short: String = summary.chars().take(SHORT_SUMMARY_CHARS).collect();
            short.push_str("...");
            short
        } else {
            summary.to_string()
        }
    }

    pub fn used_fallback_date(&self) -> bool {
        self.date_origin == DateOrigin::FetchTime
    }
}

/// Exchange shape: absent optionals become "" or [], never null.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArticleRecord<'a> {
    title: &'a str,
    url: &'a str,
    published_date: &'a str,
    source: &'a str,
    summary: String,
    author: &'a str,
    tags: &'a [String],
    image_url: &'a str,
}

impl Serialize for Article {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ArticleRecord {
            title: &self.title,
            url: &self.url,
            published_date: &self.published_date,
            source: &self.source,
            summary: self.short_summary(),
            author: self.author.as_deref().unwrap_or(""),
            tags: self.tags.as_deref().unwrap_or(&[]),
            image_url: self.image_url.as_deref().unwrap_or(""),
        }
        .serialize(serializer)
    }
}
