pub mod article;
pub mod feed_result;
pub mod source;

pub use article::{Article, DateOrigin, SHORT_SUMMARY_CHARS};
pub use feed_result::FeedResult;
pub use source::{Language, SourceKind};
