use url::Url;

use crate::domain::{FeedResult, SourceKind};
use crate::errors::{TechfeedError, TechfeedResult};

pub trait FeedSource: Send + Sync {
    /// Identifies this source
    fn kind(&self) -> SourceKind;

    /// Check if this source can handle the given URL
    fn can_handle(&self, url: &str) -> bool;

    /// Fetch and normalize an arbitrary feed URL belonging to this source
    fn parse_feed(&self, url: &str) -> TechfeedResult<FeedResult>;

    /// Feed URLs fetched when no parameters are given
    fn default_feed_urls(&self) -> Vec<String>;
}

pub(crate) fn parse_url(url: &str) -> TechfeedResult<Url> {
    Url::parse(url).map_err(|e| TechfeedError::InvalidUrl(format!("{}: {}", url, e)))
}

/// True when the URL's host is one of `hosts` or a subdomain of one.
pub(crate) fn host_matches(url: &str, hosts: &[&str]) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };

    hosts
        .iter()
        .any(|h| host == *h || host.ends_with(&format!(".{}", h)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_matches_exact_and_subdomain() {
        assert!(host_matches("https://zenn.dev/feed", &["zenn.dev"]));
        assert!(host_matches("https://www.deepmind.google/blog", &["deepmind.google"]));
        assert!(!host_matches("https://notzenn.dev/feed", &["zenn.dev"]));
        assert!(!host_matches("not a url", &["zenn.dev"]));
    }

    #[test]
    fn test_parse_url_rejects_garbage() {
        let err = parse_url("::nope").unwrap_err();
        assert!(matches!(err, TechfeedError::InvalidUrl(_)));
    }
}
