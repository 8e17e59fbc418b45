use chrono::{DateTime, Local};
use tracing::debug;

use crate::domain::{Article, FeedResult, Language};
use crate::feed::document::{FeedDocument, FeedEntry};
use crate::feed::extract::{merge_tags, resolve_author, resolve_date, resolve_image, resolve_summary};
use crate::sources::profile::SourceProfile;

/// Map a parsed feed onto the common record shape using a source profile.
///
/// Entries keep the feed's native order. An empty feed is a valid result.
pub fn normalize(
    document: &FeedDocument,
    profile: &SourceProfile,
    lang: Option<Language>,
    feed_url: &str,
    fetched_at: DateTime<Local>,
) -> FeedResult {
    let source = profile.kind.source_id(lang);

    let articles: Vec<Article> = document
        .entries
        .iter()
        .map(|entry| normalize_entry(entry, profile, &source, fetched_at))
        .collect();

    FeedResult::new(articles, feed_title(document, profile, lang), feed_url.to_string(), fetched_at)
}

fn feed_title(document: &FeedDocument, profile: &SourceProfile, lang: Option<Language>) -> String {
    let base = document
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(profile.default_title);

    match lang {
        Some(lang) => format!("{} ({})", base, lang.suffix()),
        None => base.to_string(),
    }
}

fn normalize_entry(
    entry: &FeedEntry,
    profile: &SourceProfile,
    source: &str,
    fetched_at: DateTime<Local>,
) -> Article {
    let title = entry.title.clone().unwrap_or_default();
    let url = entry.link.clone().unwrap_or_default();

    let date = resolve_date(entry, profile.date_rule, fetched_at);
    if date.origin == crate::domain::DateOrigin::FetchTime {
        debug!(source, url = %url, "entry has no usable date, using fetch time");
    }

    let summary = resolve_summary(entry, profile.summary_rule);

    let author = if profile.capabilities.author {
        resolve_author(entry, profile.default_author)
    } else {
        None
    };

    let tags = profile
        .capabilities
        .tags
        .then(|| merge_tags(&[entry.categories.as_slice()]));

    let image_url = resolve_image(entry, summary.as_deref(), profile.image_strategies);

    Article::new(title, url, date.formatted, source.to_string())
        .with_summary(summary)
        .with_author(author)
        .with_tags(tags)
        .with_image_url(image_url)
        .with_date_origin(date.origin)
}
