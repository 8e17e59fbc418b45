use thiserror::Error;

#[derive(Error, Debug)]
pub enum TechfeedError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Request errors, raised before any network call
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported language: {0}. Use 'ja' or 'en'.")]
    UnsupportedLanguage(String),

    #[error("Unsupported feed source: {0}")]
    UnsupportedSource(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    #[error("Page scraping failed: {0}")]
    Scrape(String),

    #[error("OPML generation failed: {0}")]
    OpmlParse(String),

    // Output errors
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TechfeedError {
    /// True for failures that happened while talking to the remote host.
    pub fn is_transport(&self) -> bool {
        matches!(self, TechfeedError::Http(_) | TechfeedError::HttpStatus { .. })
    }
}

pub type TechfeedResult<T> = Result<T, TechfeedError>;
