use crate::domain::FeedResult;
use crate::errors::TechfeedResult;

pub fn apply_limit(result: FeedResult, limit: Option<usize>) -> FeedResult {
    match limit {
        Some(max) => result.truncate(max),
        None => result,
    }
}

/// One feed as a JSON object
pub fn to_json(result: &FeedResult) -> TechfeedResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Several feeds as a JSON array, even when only one was fetched
pub fn to_json_list(results: &[FeedResult]) -> TechfeedResult<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Human-readable listing of one feed
pub fn to_text(result: &FeedResult) -> String {
    let mut lines = vec![
        format!("{} ({} articles)", result.feed_title(), result.total_count()),
        format!("  {}", result.feed_url()),
    ];

    for article in result.articles() {
        lines.push(String::new());
        lines.push(format!("  {} {}", article.published_date, article.title));
        lines.push(format!("    {}", article.url));
        if let Some(author) = &article.author {
            lines.push(format!("    by {}", author));
        }
        if let Some(tags) = article.tags.as_ref().filter(|t| !t.is_empty()) {
            lines.push(format!("    [{}]", tags.join(", ")));
        }
        let summary = article.short_summary();
        if !summary.is_empty() {
            lines.push(format!("    {}", summary));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
