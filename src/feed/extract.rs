//! Field extraction shared by every source.
//!
//! Each rule works on a [`FeedEntry`] and returns the normalized value; the
//! per-source [`SourceProfile`](crate::sources::profile::SourceProfile)
//! picks which rule applies.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Local, Utc};
use regex::Regex;

use crate::domain::DateOrigin;
use crate::feed::document::{FeedEntry, Thumbnail};

static IMG_SRC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]+src="([^"]+)""#).expect("valid img regex"));
static IMG_SRC_ANY_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<img[^>]+src="([^"]+)""#).expect("valid img regex"));
static LOOSE_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)src="(https://[^"]+\.(?:jpg|jpeg|png|gif|webp))""#)
        .expect("valid src regex")
});

/// `2024年01月05日`
pub fn format_japanese_date<D: Datelike>(date: &D) -> String {
    format!("{}年{:02}月{:02}日", date.year(), date.month(), date.day())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    PublishedOnly,
    PublishedThenUpdated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDate {
    pub formatted: String,
    pub origin: DateOrigin,
}

pub fn resolve_date(entry: &FeedEntry, rule: DateRule, fetched_at: DateTime<Local>) -> ResolvedDate {
    let found: Option<(DateTime<Utc>, DateOrigin)> = match rule {
        DateRule::PublishedOnly => entry.published.map(|d| (d, DateOrigin::Published)),
        DateRule::PublishedThenUpdated => entry
            .published
            .map(|d| (d, DateOrigin::Published))
            .or_else(|| entry.updated.map(|d| (d, DateOrigin::Updated))),
    };

    match found {
        Some((date, origin)) => ResolvedDate {
            formatted: format_japanese_date(&date),
            origin,
        },
        None => ResolvedDate {
            formatted: format_japanese_date(&fetched_at),
            origin: DateOrigin::FetchTime,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryRule {
    SummaryOnly,
    /// Atom feeds without a summary carry the text in their content block
    SummaryThenContent,
    LongerOfSummaryAndContent,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn resolve_summary(entry: &FeedEntry, rule: SummaryRule) -> Option<String> {
    let summary = non_empty(entry.summary.as_deref());
    let content = non_empty(entry.content.as_deref());

    let chosen = match rule {
        SummaryRule::SummaryOnly => summary,
        SummaryRule::SummaryThenContent => summary.or(content),
        SummaryRule::LongerOfSummaryAndContent => match (summary, content) {
            (Some(s), Some(c)) if c.chars().count() > s.chars().count() => Some(c),
            (Some(s), _) => Some(s),
            (None, c) => c,
        },
    };

    chosen.map(str::to_string)
}

/// First named author, else the source's fixed organization name
pub fn resolve_author(entry: &FeedEntry, default_author: Option<&str>) -> Option<String> {
    entry
        .authors
        .iter()
        .find(|name| !name.trim().is_empty())
        .map(|name| name.to_string())
        .or_else(|| default_author.map(str::to_string))
}

/// Merge tag-bearing fields, keeping the first occurrence of each term
pub fn merge_tags(fields: &[&[String]]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();

    for field in fields {
        for term in field.iter() {
            if term.is_empty() || merged.contains(term) {
                continue;
            }
            merged.push(term.clone());
        }
    }

    merged
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlField {
    /// The summary as resolved by the source's summary rule
    Summary,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailPick {
    First,
    Largest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStrategy {
    /// `media:thumbnail`
    Thumbnail(ThumbnailPick),
    /// `media:content` with an image type
    MediaContent,
    /// Enclosure links with an image type
    Enclosure,
    /// Any entry link with an image type
    ImageLink,
    /// First `<img src="...">` inside HTML
    EmbeddedImg(HtmlField),
    /// Same as `EmbeddedImg`, also matching `<IMG SRC="...">`
    EmbeddedImgAnyCase(HtmlField),
    /// Bare `src="https://...jpg"` style attribute, case-insensitive
    EmbeddedSrc(HtmlField),
}

impl ImageStrategy {
    pub fn extract(&self, entry: &FeedEntry, summary: Option<&str>) -> Option<String> {
        match self {
            ImageStrategy::Thumbnail(pick) => pick_thumbnail(entry, *pick),
            ImageStrategy::MediaContent => first_media_image(entry),
            ImageStrategy::Enclosure => entry
                .links
                .iter()
                .find(|l| l.is_enclosure() && l.is_image())
                .map(|l| l.href.clone())
                // RSS enclosures arrive as media items
                .or_else(|| first_media_image(entry)),
            ImageStrategy::ImageLink => entry
                .links
                .iter()
                .find(|l| l.is_image())
                .map(|l| l.href.clone()),
            ImageStrategy::EmbeddedImg(field) => {
                html_for(entry, summary, *field).and_then(|html| capture(&IMG_SRC_RE, html))
            }
            ImageStrategy::EmbeddedImgAnyCase(field) => html_for(entry, summary, *field)
                .and_then(|html| capture(&IMG_SRC_ANY_CASE_RE, html)),
            ImageStrategy::EmbeddedSrc(field) => {
                html_for(entry, summary, *field).and_then(|html| capture(&LOOSE_SRC_RE, html))
            }
        }
    }
}

/// Walk the strategies in order; the first non-empty hit wins.
pub fn resolve_image(
    entry: &FeedEntry,
    summary: Option<&str>,
    strategies: &[ImageStrategy],
) -> Option<String> {
    strategies
        .iter()
        .find_map(|strategy| strategy.extract(entry, summary).filter(|url| !url.is_empty()))
}

fn pick_thumbnail(entry: &FeedEntry, pick: ThumbnailPick) -> Option<String> {
    let chosen = match pick {
        ThumbnailPick::First => entry.thumbnails.first(),
        // Ties keep the earlier thumbnail
        ThumbnailPick::Largest => entry.thumbnails.iter().fold(None::<&Thumbnail>, |best, t| match best {
            Some(b) if b.area() >= t.area() => Some(b),
            _ => Some(t),
        }),
    };

    chosen
        .map(|t| t.url.clone())
        .filter(|url| !url.is_empty())
}

fn first_media_image(entry: &FeedEntry) -> Option<String> {
    entry
        .media
        .iter()
        .find(|m| m.is_image())
        .map(|m| m.url.clone())
}

fn html_for<'a>(entry: &'a FeedEntry, summary: Option<&'a str>, field: HtmlField) -> Option<&'a str> {
    match field {
        HtmlField::Summary => summary,
        HtmlField::Content => entry.content.as_deref(),
    }
}

fn capture(re: &Regex, html: &str) -> Option<String> {
    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
